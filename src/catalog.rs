//! Reference data offered by the registration and profile forms.

/// Brazilian federative units as (UF code, name).
pub const STATES: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

const CITIES_BY_STATE: &[(&str, &[&str])] = &[
    (
        "SP",
        &[
            "São Paulo", "Guarulhos", "Campinas", "São Bernardo do Campo", "Santo André",
            "Osasco", "Ribeirão Preto", "Sorocaba", "Santos", "Mauá", "São José dos Campos",
            "Mogi das Cruzes", "Diadema", "Jundiaí", "Carapicuíba", "Piracicaba", "Bauru",
            "São Vicente", "Franca", "Guarujá", "Taubaté", "Praia Grande", "Limeira",
            "Suzano", "Taboão da Serra", "Sumaré", "Barueri", "Embu das Artes",
            "São Carlos", "Marília", "Indaiatuba", "Cotia", "Americana", "Jacareí",
            "Araraquara", "Presidente Prudente", "Rio Claro", "Araçatuba",
            "Santa Bárbara d'Oeste",
        ],
    ),
    (
        "RJ",
        &[
            "Rio de Janeiro", "São Gonçalo", "Duque de Caxias", "Nova Iguaçu", "Niterói",
            "Belford Roxo", "São João de Meriti", "Campos dos Goytacazes", "Petrópolis",
            "Volta Redonda", "Magé", "Macaé", "Itaboraí", "Cabo Frio", "Angra dos Reis",
            "Nova Friburgo", "Barra Mansa", "Teresópolis", "Mesquita", "Nilópolis",
        ],
    ),
    (
        "MG",
        &[
            "Belo Horizonte", "Uberlândia", "Contagem", "Juiz de Fora", "Betim",
            "Montes Claros", "Ribeirão das Neves", "Uberaba", "Governador Valadares",
            "Ipatinga", "Sete Lagoas", "Divinópolis", "Santa Luzia", "Ibirité",
            "Poços de Caldas", "Patos de Minas", "Pouso Alegre", "Teófilo Otoni",
            "Barbacena", "Sabará", "Vespasiano", "Conselheiro Lafaiete", "Varginha",
        ],
    ),
    (
        "RS",
        &[
            "Porto Alegre", "Caxias do Sul", "Pelotas", "Canoas", "Santa Maria", "Gravataí",
            "Viamão", "Novo Hamburgo", "São Leopoldo", "Rio Grande", "Alvorada",
            "Passo Fundo", "Sapucaia do Sul", "Uruguaiana", "Santa Cruz do Sul",
            "Cachoeirinha", "Bagé", "Bento Gonçalves", "Erechim", "Guaíba",
        ],
    ),
    (
        "PR",
        &[
            "Curitiba", "Londrina", "Maringá", "Ponta Grossa", "Cascavel",
            "São José dos Pinhais", "Foz do Iguaçu", "Colombo", "Guarapuava", "Paranaguá",
            "Araucária", "Toledo", "Apucarana", "Pinhais", "Campo Largo", "Arapongas",
            "Almirante Tamandaré", "Umuarama", "Paranavaí", "Sarandi", "Fazenda Rio Grande",
            "Cambé", "Francisco Beltrão",
        ],
    ),
    (
        "SC",
        &[
            "Florianópolis", "Joinville", "Blumenau", "São José", "Criciúma", "Chapecó",
            "Itajaí", "Lages", "Jaraguá do Sul", "Palhoça", "Balneário Camboriú", "Brusque",
            "Tubarão", "São Bento do Sul", "Caçador", "Camboriú", "Navegantes", "Concórdia",
            "Rio do Sul", "Araranguá",
        ],
    ),
    (
        "BA",
        &[
            "Salvador", "Feira de Santana", "Vitória da Conquista", "Camaçari", "Itabuna",
            "Juazeiro", "Lauro de Freitas", "Ilhéus", "Jequié", "Teixeira de Freitas",
            "Alagoinhas", "Porto Seguro", "Simões Filho", "Paulo Afonso", "Eunápolis",
            "Candeias", "Guanambi", "Jacobina", "Serrinha", "Senhor do Bonfim",
            "Dias d'Ávila", "Luís Eduardo Magalhães",
        ],
    ),
    (
        "GO",
        &[
            "Goiânia", "Aparecida de Goiânia", "Anápolis", "Rio Verde", "Luziânia",
            "Águas Lindas de Goiás", "Valparaíso de Goiás", "Trindade", "Formosa",
            "Novo Gama", "Itumbiara", "Senador Canedo", "Catalão", "Jataí", "Planaltina",
            "Caldas Novas", "Santo Antônio do Descoberto", "Goianésia",
        ],
    ),
    (
        "PE",
        &[
            "Recife", "Jaboatão dos Guararapes", "Olinda", "Caruaru", "Petrolina",
            "Paulista", "Cabo de Santo Agostinho", "Camaragibe", "Garanhuns",
            "Vitória de Santo Antão", "Igarassu", "São Lourenço da Mata",
            "Santa Cruz do Capibaribe", "Abreu e Lima", "Ipojuca", "Serra Talhada",
            "Araripina", "Gravatá", "Carpina", "Goiana",
        ],
    ),
    (
        "CE",
        &[
            "Fortaleza", "Caucaia", "Juazeiro do Norte", "Maracanaú", "Sobral", "Crato",
            "Itapipoca", "Maranguape", "Iguatu", "Quixadá", "Canindé", "Aquiraz",
            "Pacatuba", "Crateús", "Russas", "Aracati", "Cascavel", "Pacajus", "Icó",
            "Horizonte",
        ],
    ),
    (
        "PA",
        &[
            "Belém", "Ananindeua", "Santarém", "Marabá", "Parauapebas", "Castanhal",
            "Abaetetuba", "Cametá", "Marituba", "Bragança", "Altamira", "Tucuruí",
            "Benevides", "Paragominas", "Redenção", "Barcarena", "Capanema", "Tailândia",
            "Oriximiná", "Breves",
        ],
    ),
    (
        "MA",
        &[
            "São Luís", "Imperatriz", "São José de Ribamar", "Timon", "Caxias", "Codó",
            "Paço do Lumiar", "Açailândia", "Bacabal", "Balsas", "Santa Inês", "Pinheiro",
            "Pedreiras", "Chapadinha", "Santa Luzia", "Barra do Corda", "Coelho Neto",
            "Rosário", "Presidente Dutra", "Viana",
        ],
    ),
    (
        "AC",
        &[
            "Rio Branco", "Cruzeiro do Sul", "Sena Madureira", "Tarauacá", "Feijó",
            "Brasiléia", "Plácido de Castro", "Xapuri", "Senador Guiomard",
            "Marechal Thaumaturgo",
        ],
    ),
    (
        "AL",
        &[
            "Maceió", "Arapiraca", "Rio Largo", "Palmeira dos Índios", "União dos Palmares",
            "Penedo", "São Miguel dos Campos", "Campo Alegre", "Delmiro Gouveia",
            "Coruripe",
        ],
    ),
    (
        "AP",
        &[
            "Macapá", "Santana", "Laranjal do Jari", "Oiapoque", "Porto Grande", "Mazagão",
            "Tartarugalzinho", "Pedra Branca do Amapari", "Ferreira Gomes", "Cutias",
        ],
    ),
    (
        "AM",
        &[
            "Manaus", "Parintins", "Itacoatiara", "Manacapuru", "Coari", "Tefé",
            "Benjamin Constant", "Tabatinga", "Maués", "Iranduba",
        ],
    ),
    (
        "DF",
        &[
            "Brasília", "Ceilândia", "Taguatinga", "Samambaia", "Planaltina", "Sobradinho",
            "Gama", "Recanto das Emas", "Santa Maria", "Guará",
        ],
    ),
    (
        "ES",
        &[
            "Vitória", "Vila Velha", "Serra", "Cariacica", "Cachoeiro de Itapemirim",
            "Linhares", "Guarapari", "Colatina", "Aracruz", "Viana",
        ],
    ),
    (
        "MT",
        &[
            "Cuiabá", "Várzea Grande", "Rondonópolis", "Sinop", "Tangará da Serra",
            "Cáceres", "Primavera do Leste", "Sorriso", "Barra do Garças",
            "Lucas do Rio Verde",
        ],
    ),
    (
        "MS",
        &[
            "Campo Grande", "Dourados", "Três Lagoas", "Corumbá", "Ponta Porã", "Naviraí",
            "Nova Andradina", "Paranaíba", "Aquidauana", "Sidrolândia",
        ],
    ),
    (
        "PB",
        &[
            "João Pessoa", "Campina Grande", "Santa Rita", "Patos", "Bayeux", "Sousa",
            "Cajazeiras", "Guarabira", "Cabedelo", "Itabaiana",
        ],
    ),
    (
        "PI",
        &[
            "Teresina", "Parnaíba", "Picos", "Piripiri", "Floriano", "Campo Maior",
            "Barras", "União", "José de Freitas", "Altos",
        ],
    ),
    (
        "RN",
        &[
            "Natal", "Mossoró", "Parnamirim", "São Gonçalo do Amarante", "Macaíba",
            "Ceará-Mirim", "Caicó", "Assú", "Currais Novos", "Santa Cruz",
        ],
    ),
    (
        "RO",
        &[
            "Porto Velho", "Ji-Paraná", "Ariquemes", "Vilhena", "Cacoal", "Rolim de Moura",
            "Guajará-Mirim", "Pimenta Bueno", "Jaru", "Ouro Preto do Oeste",
        ],
    ),
    (
        "RR",
        &[
            "Boa Vista", "Rorainópolis", "Caracaraí", "Cantá", "Alto Alegre", "Pacaraima",
            "Mucajaí", "Amajari", "Bonfim", "Iracema",
        ],
    ),
    (
        "SE",
        &[
            "Aracaju", "Nossa Senhora do Socorro", "Lagarto", "Itabaiana", "Estância",
            "São Cristóvão", "Itabaianinha", "Tobias Barreto", "Simão Dias", "Propriá",
        ],
    ),
    (
        "TO",
        &[
            "Palmas", "Araguaína", "Gurupi", "Porto Nacional", "Paraíso do Tocantins",
            "Colinas do Tocantins", "Guaraí", "Tocantinópolis", "Dianópolis",
            "Formoso do Araguaia",
        ],
    ),
];

pub const CATEGORIES: &[&str] = &[
    "Electrician",
    "Plumber",
    "Bricklayer",
    "Painter",
    "Carpenter",
    "Hairdresser",
    "Manicurist",
    "Beautician",
    "Housekeeper",
    "Gardener",
    "IT Technician",
    "Mechanic",
    "Private Tutor",
    "Massage Therapist",
    "Personal Trainer",
    "Photographer",
    "Lawyer",
    "Accountant",
    "Architect",
    "Designer",
    "Other",
];

pub fn states() -> &'static [(&'static str, &'static str)] {
    STATES
}

pub fn state_name(code: &str) -> Option<&'static str> {
    STATES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

pub fn is_known_state(code: &str) -> bool {
    state_name(code).is_some()
}

/// Cities offered for a state. Unknown codes yield an empty list.
pub fn cities_for(state: &str) -> &'static [&'static str] {
    CITIES_BY_STATE
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn categories() -> &'static [&'static str] {
    CATEGORIES
}

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_cities() {
        assert_eq!(states().len(), 27);
        for (code, _) in states() {
            assert!(!cities_for(code).is_empty(), "no cities for {}", code);
        }
    }

    #[test]
    fn unknown_state_has_no_cities() {
        assert!(cities_for("XX").is_empty());
        assert!(!is_known_state("XX"));
        assert_eq!(state_name("SP"), Some("São Paulo"));
    }

    #[test]
    fn categories_end_with_other() {
        assert_eq!(categories().len(), 21);
        assert_eq!(categories().last(), Some(&"Other"));
        assert!(is_known_category("Plumber"));
        assert!(!is_known_category("plumber"));
    }
}
