use contactbook::config::Config;
use contactbook::utils::logging::init_tracing;
use contactbook::{ContactService, db};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        loglevel = %cfg.basic.loglevel,
        birthday_window_days = cfg.contacts.birthday_window_days,
        "configuration loaded"
    );

    let pool = db::connect(&cfg.basic.database_url).await?;
    let service = ContactService::new(pool.clone());

    let days = cfg.contacts.birthday_window_days;
    let upcoming = service.get_upcoming_birthdays(days).await?;
    if upcoming.is_empty() {
        info!(days, "no upcoming birthdays");
    }
    for contact in &upcoming {
        info!(
            id = contact.id,
            name = %contact.name,
            surname = %contact.surname,
            email = %contact.email,
            birthday = %contact.birthday,
            "upcoming birthday"
        );
    }

    pool.close().await;
    Ok(())
}
