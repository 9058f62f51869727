use {
    brew_confirm::{
        adapters::http_confirm::HttpConfirm,
        domain::nav::{Navigator, Route},
        infra::fs_store::FsCheckoutStore,
        services::screen::SuccessScreen,
    },
    std::{env, sync::Arc},
    tokio::{signal, sync::watch},
    url::Url,
};

/// Navigator for the headless host: records the destination and signals the
/// run loop to exit.
struct ExitNavigator {
    tx: watch::Sender<Option<Route>>,
}

impl Navigator for ExitNavigator {
    fn navigate(&self, route: Route) {
        let _ = self.tx.send(Some(route));
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let api_base = env::var("API_BASE_URL").expect("API_BASE_URL must be set");
    let api_base = Url::parse(&api_base).expect("API_BASE_URL must be a valid URL");
    let storage_dir = env::var("CHECKOUT_STORAGE_DIR").unwrap_or_else(|_| "./storage".to_string());

    let store = FsCheckoutStore::new(&storage_dir);
    let endpoint = Arc::new(HttpConfirm::new(api_base).expect("failed to build confirm client"));

    let (tx, mut navigated) = watch::channel::<Option<Route>>(None);
    let navigator = Arc::new(ExitNavigator { tx });

    let screen = SuccessScreen::mount(&store, endpoint, navigator);
    tracing::info!("payment received, redirecting shortly (ctrl+c to go now)");

    let mut countdown = screen.countdown();
    let mut counting = true;
    loop {
        tokio::select! {
            _ = navigated.changed() => break,
            changed = countdown.changed(), if counting => match changed {
                Ok(()) => tracing::info!(seconds = *countdown.borrow(), "redirecting"),
                Err(_) => counting = false,
            },
            _ = signal::ctrl_c() => screen.skip(),
        }
    }

    let route = (*navigated.borrow()).expect("navigation always carries a route");
    tracing::info!(route = %route, "navigated, shutting down");
}
