#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use clientreviews::api::{get_approved_reviews, APPROVED_REVIEWS_PATH};
    use clientreviews::app::App as ReviewsApp;
    use clientreviews::config::ServerConfig;
    use leptos::get_configuration;
    use leptos::logging::{error, log};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::io;

    // Load .env if present
    let _ = dotenvy::dotenv();

    // Pick the approved-review store from the environment
    let config = ServerConfig::from_env().map_err(|e| {
        error!("[CONFIG] {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let source = config.connect().await.map_err(|e| {
        error!("[CONFIG] Could not open review store: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let source = web::Data::from(source);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(ReviewsApp);
    log!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(source.clone())
            .route(APPROVED_REVIEWS_PATH, web::get().to(get_approved_reviews))
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), ReviewsApp)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use clientreviews::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
