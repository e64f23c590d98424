mod auth;
mod catalog;
mod config;
mod db;
mod directory;
mod error;
mod models;
mod portfolio;
mod requests;
mod ui;
mod validation;

use std::{
    fs::OpenOptions,
    io::{self, Write},
    sync::Mutex,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::directory::{star_bar, ProfessionalFilter};
use crate::error::AppError;
use crate::models::{Professional, User};
use crate::ui::{
    login::{LoginState, LoginAction, render_login, handle_input as handle_login_input},
    register_wizard::{RegisterWizardState, RegisterWizardAction, render_register_wizard, handle_input as handle_register_input},
    professionals::{ProfessionalsState, ProfessionalAction, render_professionals, handle_input as handle_professionals_input, load_professionals},
    professional_details::{ProfessionalDetailsState, DetailsAction, render_professional_details, handle_input as handle_details_input, load_details},
    request_wizard::{RequestWizardState, RequestWizardAction, render_request_wizard, handle_input as handle_request_wizard_input},
    my_services::{MyServicesState, MyServicesAction, render_my_services, handle_input as handle_my_services_input},
    profile::{ProfileState, ProfileAction, render_profile, handle_input as handle_profile_input},
    profile_wizard::{ProfileWizardState, ProfileWizardAction, render_profile_wizard, handle_input as handle_profile_wizard_input},
    portfolio::{PortfolioState, PortfolioAction, render_portfolio, handle_input as handle_portfolio_input},
};

#[derive(Parser)]
#[command(name = "local-pros", version, about = "Find and hire local service professionals")]
struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Log file, overrides LOG_FILE
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the professionals directory and exit
    Professionals {
        /// Text matched against name and category
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the professional categories
    Categories,
}

// Represents the current screen in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppScreen {
    Login,
    Register,
    Professionals,
    ProfessionalDetails,
    RequestWizard,
    MyServices,
    Profile,
    ProfileWizard,
    Portfolio,
}

impl AppScreen {
    /// The directory when a session was restored, login otherwise.
    fn start(user: Option<&User>) -> Self {
        match user {
            Some(_) => AppScreen::Professionals,
            None => AppScreen::Login,
        }
    }

    fn requires_session(&self) -> bool {
        !matches!(self, AppScreen::Login | AppScreen::Register)
    }
}

// Main application state
struct AppState {
    db: db::Database,
    config: Config,
    user: Option<User>,
    screen: AppScreen,
    login_state: Option<LoginState>,
    register_state: Option<RegisterWizardState>,
    professionals_state: Option<ProfessionalsState>,
    details_state: Option<ProfessionalDetailsState>,
    request_wizard_state: Option<RequestWizardState>,
    my_services_state: Option<MyServicesState>,
    profile_state: Option<ProfileState>,
    profile_wizard_state: Option<ProfileWizardState>,
    portfolio_state: Option<PortfolioState>,
}

impl AppState {
    fn new(db: db::Database, config: Config) -> Self {
        Self {
            db,
            config,
            user: None,
            screen: AppScreen::Login,
            login_state: None,
            register_state: None,
            professionals_state: None,
            details_state: None,
            request_wizard_state: None,
            my_services_state: None,
            profile_state: None,
            profile_wizard_state: None,
            portfolio_state: None,
        }
    }

    fn clear_screens(&mut self) {
        self.login_state = None;
        self.register_state = None;
        self.professionals_state = None;
        self.details_state = None;
        self.request_wizard_state = None;
        self.my_services_state = None;
        self.profile_state = None;
        self.profile_wizard_state = None;
        self.portfolio_state = None;
    }

    /// Sends the user back to login when the current screen needs a session
    /// that is not there.
    fn enforce_session(&mut self) {
        if self.screen.requires_session() && self.user.is_none() {
            show_login(self, None);
        }
    }
}

fn init_tracing(log_file: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %log_file, "logging initialized");
        }
        // Without a log file stay silent rather than writing over the TUI.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

/// Domain errors become a message for the current screen; anything else
/// aborts the app.
fn user_message(err: AppError) -> Result<String> {
    if err.is_user_facing() {
        tracing::debug!(error = %err, "shown to user");
        Ok(err.to_string())
    } else {
        Err(err.into())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::init(cli.database_url, cli.log_file)?;
    init_tracing(&config.log_file);

    match cli.command {
        Some(Command::Categories) => {
            return write_categories(&mut io::stdout().lock());
        }
        Some(Command::Professionals { search, category, min_rating, json }) => {
            let filter = directory_filter(search, category, min_rating)?;
            let db = db::init(&config).await?;
            let professionals = filter.apply(&load_professionals(&db).await?);
            return write_professionals(&mut io::stdout().lock(), &professionals, &filter, json);
        }
        None => {}
    }

    // Initialize database connection
    let db = db::init(&config).await?;
    let user = auth::restore(&db).await?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state, starting on the directory when a session exists
    let mut app_state = AppState::new(db, config);
    match AppScreen::start(user.as_ref()) {
        AppScreen::Login => show_login(&mut app_state, None),
        _ => {
            tracing::info!(user_id = ?user.as_ref().map(|u| u.id), "session restored");
            app_state.user = user;
            show_professionals(&mut app_state).await?;
        }
    }

    // Run the main app loop
    let result = run_app(&mut terminal, &mut app_state).await;

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Show any error message
    if let Err(err) = result {
        tracing::error!(error = %err, "app stopped");
        println!("Error: {}", err);
    }

    println!("Thanks for using Local Pros!");

    Ok(())
}

fn directory_filter(search: String, category: Option<String>, min_rating: Option<f64>) -> Result<ProfessionalFilter> {
    if let Some(category) = category.as_deref() {
        if !catalog::is_known_category(category) {
            anyhow::bail!("Unknown category '{}', see the `categories` command", category);
        }
    }
    if let Some(min) = min_rating {
        if !(0.0..=5.0).contains(&min) {
            anyhow::bail!("--min-rating must be between 0 and 5");
        }
    }
    Ok(ProfessionalFilter { search, category, min_rating })
}

fn write_categories(out: &mut impl Write) -> Result<()> {
    for category in catalog::categories() {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}

fn write_professionals(
    out: &mut impl Write,
    professionals: &[Professional],
    filter: &ProfessionalFilter,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(professionals)?)?;
        return Ok(());
    }

    if professionals.is_empty() {
        if filter.is_empty() {
            writeln!(out, "No professionals registered yet")?;
        } else {
            writeln!(out, "No professionals match these filters")?;
        }
        return Ok(());
    }
    for p in professionals {
        writeln!(
            out,
            "{:<28} {:<20} {} {:.1} ({} reviews)  {}",
            p.name(),
            p.category(),
            star_bar(p.average_rating),
            p.average_rating,
            p.total_reviews,
            p.user.location()
        )?;
    }
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        app_state.enforce_session();

        // Render current screen
        terminal.draw(|f| {
            match app_state.screen {
                AppScreen::Login => {
                    if let Some(state) = &mut app_state.login_state {
                        render_login(f, state);
                    }
                }
                AppScreen::Register => {
                    if let Some(state) = &mut app_state.register_state {
                        render_register_wizard(f, state);
                    }
                }
                AppScreen::Professionals => {
                    if let Some(state) = &mut app_state.professionals_state {
                        render_professionals(f, state);
                    }
                }
                AppScreen::ProfessionalDetails => {
                    if let Some(state) = &mut app_state.details_state {
                        render_professional_details(f, state);
                    }
                }
                AppScreen::RequestWizard => {
                    if let Some(state) = &mut app_state.request_wizard_state {
                        render_request_wizard(f, state);
                    }
                }
                AppScreen::MyServices => {
                    if let Some(state) = &mut app_state.my_services_state {
                        render_my_services(f, state);
                    }
                }
                AppScreen::Profile => {
                    if let Some(state) = &mut app_state.profile_state {
                        render_profile(f, state);
                    }
                }
                AppScreen::ProfileWizard => {
                    if let Some(state) = &mut app_state.profile_wizard_state {
                        render_profile_wizard(f, state);
                    }
                }
                AppScreen::Portfolio => {
                    if let Some(state) = &mut app_state.portfolio_state {
                        render_portfolio(f, state);
                    }
                }
            }
        })?;

        // Handle input for current screen
        let should_quit = match app_state.screen {
            AppScreen::Login => handle_login_screen(app_state).await?,
            AppScreen::Register => handle_register_screen(app_state).await?,
            AppScreen::Professionals => handle_professionals_screen(app_state).await?,
            AppScreen::ProfessionalDetails => handle_details_screen(app_state).await?,
            AppScreen::RequestWizard => handle_request_wizard_screen(app_state).await?,
            AppScreen::MyServices => handle_my_services_screen(app_state).await?,
            AppScreen::Profile => handle_profile_screen(app_state).await?,
            AppScreen::ProfileWizard => handle_profile_wizard_screen(app_state).await?,
            AppScreen::Portfolio => handle_portfolio_screen(app_state).await?,
        };

        if should_quit {
            break;
        }
    }

    Ok(())
}

fn show_login(app_state: &mut AppState, error: Option<String>) {
    app_state.clear_screens();
    let state = LoginState::new();
    app_state.login_state = Some(match error {
        Some(error) => state.with_error(error),
        None => state,
    });
    app_state.screen = AppScreen::Login;
}

async fn show_professionals(app_state: &mut AppState) -> Result<()> {
    let Some(user) = &app_state.user else {
        show_login(app_state, None);
        return Ok(());
    };

    // Reload the list but keep the filters the user already picked
    let professionals = load_professionals(&app_state.db).await?;
    match &mut app_state.professionals_state {
        Some(state) => {
            state.set_user_name(&user.name);
            state.reload(professionals);
        }
        None => app_state.professionals_state = Some(ProfessionalsState::new(&user.name, professionals)),
    }
    app_state.screen = AppScreen::Professionals;

    Ok(())
}

async fn show_details(app_state: &mut AppState, professional_id: i64, viewer_id: i64) -> Result<()> {
    match load_details(&app_state.db, professional_id).await {
        Ok((professional, ratings, images)) => {
            app_state.details_state = Some(ProfessionalDetailsState::new(professional, ratings, images, viewer_id));
            app_state.screen = AppScreen::ProfessionalDetails;
        }
        Err(err) => {
            let message = user_message(err)?;
            if let Some(state) = &mut app_state.professionals_state {
                state.message = Some(message);
            }
        }
    }
    Ok(())
}

async fn show_request_wizard(app_state: &mut AppState, professional_id: i64) -> Result<()> {
    match app_state.db.get_professional(professional_id).await {
        Ok(professional) => {
            app_state.request_wizard_state = Some(RequestWizardState::new(professional));
            app_state.screen = AppScreen::RequestWizard;
        }
        // The professional is gone; back to a fresh directory
        Err(err) => {
            let message = user_message(err)?;
            show_professionals(app_state).await?;
            if let Some(state) = &mut app_state.professionals_state {
                state.message = Some(message);
            }
        }
    }
    Ok(())
}

async fn show_my_services(app_state: &mut AppState, user: &User, message: Option<String>) -> Result<()> {
    let list = match requests::load_for_user(&app_state.db, user).await {
        Ok(list) => list,
        Err(err) => {
            let message = user_message(err)?;
            if let Some(state) = &mut app_state.professionals_state {
                state.message = Some(message);
            }
            return Ok(());
        }
    };
    let state = MyServicesState::new(user, list);
    app_state.my_services_state = Some(match message {
        Some(message) => state.with_message(message),
        None => state,
    });
    app_state.screen = AppScreen::MyServices;
    Ok(())
}

async fn show_profile(app_state: &mut AppState, user: User, message: Option<String>) -> Result<()> {
    let portfolio_count = if user.is_professional() {
        portfolio::load(&app_state.db, user.id).await?.len()
    } else {
        0
    };
    let state = ProfileState::new(user, portfolio_count);
    app_state.profile_state = Some(match message {
        Some(message) => state.with_message(message),
        None => state,
    });
    app_state.screen = AppScreen::Profile;
    Ok(())
}

async fn show_portfolio(app_state: &mut AppState, user: &User) -> Result<()> {
    let images = portfolio::load(&app_state.db, user.id).await?;
    app_state.portfolio_state = Some(PortfolioState::new(images, app_state.config.portfolio_max_images));
    app_state.screen = AppScreen::Portfolio;
    Ok(())
}

async fn handle_login_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.login_state {
        Some(state) => handle_login_input(state)?,
        None => return Ok(false),
    };

    match action {
        Some(LoginAction::Exit) => return Ok(true),
        Some(LoginAction::Register) => {
            app_state.register_state = Some(RegisterWizardState::new());
            app_state.screen = AppScreen::Register;
        }
        Some(LoginAction::Submit { email, password }) => {
            match auth::login(&app_state.db, &email, &password).await {
                Ok(user) => {
                    app_state.clear_screens();
                    app_state.user = Some(user);
                    show_professionals(app_state).await?;
                }
                Err(err) => {
                    let message = user_message(err)?;
                    if let Some(state) = &mut app_state.login_state {
                        state.form.error = Some(message);
                    }
                }
            }
        }
        None => {}
    }

    Ok(false)
}

async fn handle_register_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.register_state {
        Some(state) => handle_register_input(state)?,
        None => return Ok(false),
    };

    match action {
        Some(RegisterWizardAction::Cancel) => show_login(app_state, None),
        Some(RegisterWizardAction::Submit(new_user)) => {
            match auth::register(&app_state.db, &new_user).await {
                Ok(user) => {
                    app_state.clear_screens();
                    app_state.user = Some(user);
                    show_professionals(app_state).await?;
                }
                Err(err) => {
                    let message = user_message(err)?;
                    if let Some(state) = &mut app_state.register_state {
                        state.form.error = Some(message);
                    }
                }
            }
        }
        None => {}
    }

    Ok(false)
}

async fn handle_professionals_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.professionals_state {
        Some(state) => handle_professionals_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    match action {
        Some(ProfessionalAction::Exit) => return Ok(true),
        Some(ProfessionalAction::Refresh) => show_professionals(app_state).await?,
        Some(ProfessionalAction::Profile) => show_profile(app_state, user, None).await?,
        Some(ProfessionalAction::MyServices) => show_my_services(app_state, &user, None).await?,
        Some(ProfessionalAction::ViewDetails(professional_id)) => {
            show_details(app_state, professional_id, user.id).await?;
        }
        None => {}
    }

    Ok(false)
}

async fn handle_details_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.details_state {
        Some(state) => handle_details_input(state)?,
        None => return Ok(false),
    };

    match action {
        Some(DetailsAction::Back) => app_state.screen = AppScreen::Professionals,
        Some(DetailsAction::RequestService(professional_id)) => {
            show_request_wizard(app_state, professional_id).await?;
        }
        None => {}
    }

    Ok(false)
}

async fn handle_request_wizard_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.request_wizard_state {
        Some(state) => handle_request_wizard_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    match action {
        Some(RequestWizardAction::Cancel) => app_state.screen = AppScreen::ProfessionalDetails,
        Some(RequestWizardAction::Submit(form)) => {
            let Some(professional) = app_state
                .request_wizard_state
                .as_ref()
                .map(|state| state.professional().clone())
            else {
                return Ok(false);
            };

            match requests::request_service(&app_state.db, &user, &professional, &form).await {
                Ok(_) => {
                    app_state.request_wizard_state = None;
                    let message = format!("Request sent to {}", professional.name());
                    show_my_services(app_state, &user, Some(message)).await?;
                }
                Err(err) => {
                    let message = user_message(err)?;
                    if let Some(state) = &mut app_state.request_wizard_state {
                        state.form.error = Some(message);
                    }
                }
            }
        }
        None => {}
    }

    Ok(false)
}

async fn handle_my_services_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.my_services_state {
        Some(state) => handle_my_services_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    match action {
        Some(MyServicesAction::Back) => show_professionals(app_state).await?,
        Some(MyServicesAction::Refresh) => show_my_services(app_state, &user, None).await?,
        Some(MyServicesAction::Accept(request_id)) => {
            let message = match requests::accept(&app_state.db, &user, request_id).await {
                Ok(()) => "Request accepted".to_string(),
                Err(err) => user_message(err)?,
            };
            show_my_services(app_state, &user, Some(message)).await?;
        }
        Some(MyServicesAction::Cancel(request_id)) => {
            let message = match requests::cancel(&app_state.db, &user, request_id).await {
                Ok(()) => "Request cancelled".to_string(),
                Err(err) => user_message(err)?,
            };
            show_my_services(app_state, &user, Some(message)).await?;
        }
        Some(MyServicesAction::Complete { request_id, score, comment }) => {
            match requests::complete(&app_state.db, &user, request_id, score, &comment).await {
                Ok(request) => {
                    let message = format!("Thanks for rating {}", request.professional_name);
                    show_my_services(app_state, &user, Some(message)).await?;
                }
                Err(err) => {
                    let message = user_message(err)?;
                    if let Some(state) = &mut app_state.my_services_state {
                        state.set_rating_error(message);
                    }
                }
            }
        }
        None => {}
    }

    Ok(false)
}

async fn handle_profile_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.profile_state {
        Some(state) => handle_profile_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    match action {
        Some(ProfileAction::Back) => show_professionals(app_state).await?,
        Some(ProfileAction::Edit) => {
            app_state.profile_wizard_state = Some(ProfileWizardState::edit(&user));
            app_state.screen = AppScreen::ProfileWizard;
        }
        Some(ProfileAction::BecomeProfessional) => {
            app_state.profile_wizard_state = Some(ProfileWizardState::become_professional());
            app_state.screen = AppScreen::ProfileWizard;
        }
        Some(ProfileAction::Portfolio) => show_portfolio(app_state, &user).await?,
        Some(ProfileAction::SetProfileImage(uri)) => {
            match portfolio::set_profile_image(&app_state.db, &user, &uri).await {
                Ok(image) => {
                    let message = if image.is_some() { "Profile image saved" } else { "Profile image removed" };
                    let mut updated = user;
                    updated.profile_image = image;
                    app_state.user = Some(updated.clone());
                    show_profile(app_state, updated, Some(message.to_string())).await?;
                }
                Err(err) => {
                    let message = user_message(err)?;
                    show_profile(app_state, user, Some(message)).await?;
                }
            }
        }
        Some(ProfileAction::Logout) => {
            auth::logout(&app_state.db).await?;
            app_state.user = None;
            show_login(app_state, None);
        }
        None => {}
    }

    Ok(false)
}

async fn handle_profile_wizard_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.profile_wizard_state {
        Some(state) => handle_profile_wizard_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    let saved = match action {
        Some(ProfileWizardAction::Cancel) => {
            show_profile(app_state, user, None).await?;
            return Ok(false);
        }
        Some(ProfileWizardAction::SaveProfile(update)) => auth::update_profile(&app_state.db, &user, &update)
            .await
            .map(|u| (u, "Profile updated")),
        Some(ProfileWizardAction::BecomeProfessional(details)) => {
            auth::become_professional(&app_state.db, &user, &details)
                .await
                .map(|u| (u, "You are now listed as a professional"))
        }
        None => return Ok(false),
    };

    match saved {
        Ok((updated, message)) => {
            app_state.user = Some(updated.clone());
            app_state.profile_wizard_state = None;
            show_profile(app_state, updated, Some(message.to_string())).await?;
        }
        Err(err) => {
            let message = user_message(err)?;
            if let Some(state) = &mut app_state.profile_wizard_state {
                state.form.error = Some(message);
            }
        }
    }

    Ok(false)
}

async fn handle_portfolio_screen(app_state: &mut AppState) -> Result<bool> {
    let action = match &mut app_state.portfolio_state {
        Some(state) => handle_portfolio_input(state)?,
        None => return Ok(false),
    };
    let Some(user) = app_state.user.clone() else {
        return Ok(false);
    };

    let result = match action {
        Some(PortfolioAction::Back) => {
            show_profile(app_state, user, None).await?;
            return Ok(false);
        }
        Some(PortfolioAction::Add(uris)) => {
            let free = app_state.portfolio_state.as_ref().map_or(0, |s| s.remaining());
            portfolio::add_images(&app_state.db, &app_state.config, &user, &uris)
                .await
                .map(|images| {
                    let added = free.min(uris.len());
                    let message = if added < uris.len() {
                        format!("Added {} of {} images, the portfolio is full", added, uris.len())
                    } else {
                        format!("Added {} image(s)", added)
                    };
                    (images, message)
                })
        }
        Some(PortfolioAction::Remove(uri)) => portfolio::remove_image(&app_state.db, &user, &uri)
            .await
            .map(|images| (images, "Image removed".to_string())),
        Some(PortfolioAction::Move { index, direction }) => {
            portfolio::move_image(&app_state.db, &user, index, direction)
                .await
                .map(|images| (images, "Portfolio order saved".to_string()))
        }
        None => return Ok(false),
    };

    let outcome = match result {
        Ok(outcome) => Ok(outcome),
        Err(err) => Err(user_message(err)?),
    };
    if let Some(state) = &mut app_state.portfolio_state {
        match outcome {
            Ok((images, message)) => {
                state.set_images(images);
                state.message = Some(message);
            }
            Err(message) => state.message = Some(message),
        }
    }

    Ok(false)
}
