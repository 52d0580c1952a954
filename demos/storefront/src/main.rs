mod chrome;

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::info;
use vitrine::errors::VitrineError;
use vitrine::route::prelude::*;
use vitrine::{init_logging, print_title};

use chrome::SiteChrome;

fn main() -> Result<(), VitrineError> {
    init_logging();

    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build async runtime");

    async_runtime.block_on(generate())
}

async fn generate() -> Result<(), VitrineError> {
    let client = InMemoryClient::from_json(include_str!("../fixtures/site.json"))?;
    let locales = vec!["en".to_string(), "fr".to_string()];
    let route = ContentPages::with_layout(SiteChrome);
    let output_dir = Path::new("dist");

    print_title("generating pages");

    let static_paths = route.static_paths(&client, Some(&locales)).await?;

    for path in &static_paths.paths {
        let start = Instant::now();

        let Some(request) = ContentPages::request_for(path, Some(&locales), false) else {
            continue;
        };
        let props = route.static_props(&client, &request).await?;
        let html = route.chrome().wrap(route.render(&props)).into_string();

        let file_path = output_dir
            .join(path.trim_start_matches('/'))
            .join("index.html");
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, html)?;

        info!(
            target: "pages",
            "{} -> {} (+{:?})",
            path,
            file_path.display(),
            start.elapsed()
        );
    }

    info!(target: "pages", "generated {} page(s)", static_paths.paths.len());

    Ok(())
}
