#[actix_web::main]
async fn main() -> travel_translator_lib::Result<()> {
    travel_translator_lib::run().await
}
