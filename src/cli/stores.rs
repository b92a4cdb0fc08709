use dinnerizer_kroger::KrogerClient;

pub async fn list_stores(
    config: crate::config::Config,
    latitude: f64,
    longitude: f64,
) -> anyhow::Result<()> {
    let client = KrogerClient::new(config.api.base_url.to_owned(), config.api.timeout())?;

    let stores = client.find_stores(latitude, longitude).await?;
    if stores.is_empty() {
        println!("No stores found near {latitude}, {longitude}.");
    }

    for store in stores {
        println!("{}  {}", store.location_id, store.name);
    }

    Ok(())
}
