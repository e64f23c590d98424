//! Category and address fields shared by the registration and profile forms.

use super::form::{FormField, FormState};
use super::picker::PickerState;
use crate::catalog;
use crate::models::Address;

pub const CATEGORY: &str = "category";
pub const DESCRIPTION: &str = "description";
pub const EXPERIENCE: &str = "experience";
pub const STREET: &str = "street";
pub const NUMBER: &str = "number";
pub const COMPLEMENT: &str = "complement";
pub const NEIGHBORHOOD: &str = "neighborhood";
pub const STATE: &str = "state";
pub const CITY: &str = "city";
pub const ZIP_CODE: &str = "zip_code";

const ALL: [&str; 10] = [
    CATEGORY, DESCRIPTION, EXPERIENCE, STREET, NUMBER, COMPLEMENT, NEIGHBORHOOD, STATE, CITY, ZIP_CODE,
];

fn state_picker() -> PickerState {
    let options = catalog::states()
        .iter()
        .map(|(code, name)| (code.to_string(), format!("{} ({})", name, code)))
        .collect();
    PickerState::new(options, "(select a state)")
}

fn city_options(state: &str) -> Vec<(String, String)> {
    catalog::cities_for(state)
        .iter()
        .map(|city| (city.to_string(), city.to_string()))
        .collect()
}

pub fn fields() -> Vec<FormField> {
    vec![
        FormField::picker(
            CATEGORY,
            "Category",
            PickerState::from_values(catalog::categories().iter().copied(), "(select a category)"),
        )
        .required(),
        FormField::text(DESCRIPTION, "Services offered").required(),
        FormField::text(EXPERIENCE, "Experience"),
        FormField::text(STREET, "Street").required(),
        FormField::text(NUMBER, "Number").required(),
        FormField::text(COMPLEMENT, "Complement"),
        FormField::text(NEIGHBORHOOD, "Neighborhood").required(),
        FormField::picker(STATE, "State", state_picker()).required(),
        FormField::picker(CITY, "City", PickerState::new(Vec::new(), "(select the state first)")).required(),
        FormField::zip_code(ZIP_CODE, "Zip code").required(),
    ]
}

pub fn set_hidden(form: &mut FormState, hidden: bool) {
    for id in ALL {
        form.set_hidden(id, hidden);
    }
}

/// A new state resets the city choice and offers that state's cities.
pub fn state_changed(form: &mut FormState) {
    let state = form.value(STATE);
    if let Some(city) = form.picker_mut(CITY) {
        city.replace_options(city_options(&state));
    }
}

pub fn read_address(form: &FormState) -> Address {
    let complement = form.value(COMPLEMENT);
    Address {
        street: form.value(STREET).trim().to_string(),
        number: form.value(NUMBER).trim().to_string(),
        complement: (!complement.trim().is_empty()).then(|| complement.trim().to_string()),
        neighborhood: form.value(NEIGHBORHOOD).trim().to_string(),
        city: form.value(CITY),
        state: form.value(STATE),
        zip_code: form.value(ZIP_CODE),
    }
}

pub fn fill(form: &mut FormState, category: &str, description: &str, experience: &str, address: &Address) {
    form.set_value(CATEGORY, category);
    form.set_value(DESCRIPTION, description);
    form.set_value(EXPERIENCE, experience);
    form.set_value(STREET, &address.street);
    form.set_value(NUMBER, &address.number);
    form.set_value(COMPLEMENT, address.complement.as_deref().unwrap_or(""));
    form.set_value(NEIGHBORHOOD, &address.neighborhood);
    form.set_value(STATE, &address.state);
    state_changed(form);
    form.set_value(CITY, &address.city);
    form.set_value(ZIP_CODE, &address.zip_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_state_resets_city() {
        let mut form = FormState::new(fields());
        form.set_value(STATE, "RJ");
        state_changed(&mut form);
        form.set_value(CITY, "Niterói");
        assert_eq!(form.value(CITY), "Niterói");

        form.set_value(STATE, "SP");
        state_changed(&mut form);
        assert_eq!(form.value(CITY), "");
        form.set_value(CITY, "Niterói");
        assert_eq!(form.value(CITY), "");
        form.set_value(CITY, "Campinas");
        assert_eq!(form.value(CITY), "Campinas");
    }

    #[test]
    fn fill_then_read_address() {
        let address = Address {
            street: "Rua XV".into(),
            number: "7".into(),
            complement: Some("Casa 2".into()),
            neighborhood: "Centro".into(),
            city: "Curitiba".into(),
            state: "PR".into(),
            zip_code: "80020-310".into(),
        };
        let mut form = FormState::new(fields());
        fill(&mut form, "Painter", "Walls", "", &address);
        assert_eq!(read_address(&form), address);
        assert_eq!(form.value(CATEGORY), "Painter");
    }
}
