use tracing::info;
use library_desk::catalog::factory::create_item_repository;
use library_desk::core::domain::Configuration;
use library_desk::core::library::LibraryError;
use library_desk::desk::controller::Desk;
use library_desk::input::console::StdConsole;
use library_desk::patrons::factory::create_patron_repository;
use library_desk::store::DataStore;
use library_desk::utils::logging::setup_tracing;

fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());
    info!("starting desk with {} store in {}", config.store, config.data_dir.display());

    let patron_repository = create_patron_repository(&config);
    let item_repository = create_item_repository(&config);
    let store = DataStore::load(patron_repository.as_ref(), item_repository.as_ref())?;

    let mut desk = Desk::new(store, StdConsole::default());
    desk.run()?;

    if config.save_on_quit {
        desk.into_store().save(patron_repository.as_ref(), item_repository.as_ref())?;
    }
    Ok(())
}
