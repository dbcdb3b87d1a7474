use openimagen::{
    logger::{self, LogLevel, LoggerConfig},
    CompanyData, ImageRequest, ImagenConfig, OpenImagen,
};
use std::env;
use std::fs;

const USAGE: &str = "usage: openimagen <headline> <keyword> <company> <industry> [output.jpg] [custom instructions]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = env::var("OPENIMAGEN_LOG")
        .ok()
        .and_then(|name| LogLevel::parse(&name))
        .unwrap_or(LogLevel::Info);
    logger::init_with_config(LoggerConfig::new().with_level(level))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let mut company = CompanyData::new(&args[2], &args[3]);
    if let Some(instructions) = args.get(5) {
        company = company.with_custom_instructions(instructions);
    }
    let request = ImageRequest::new(&args[0], &args[1], company);
    let output = args
        .get(4)
        .cloned()
        .unwrap_or_else(|| "openimagen_output.jpg".to_string());

    let generator = match OpenImagen::with_config(ImagenConfig::from_env()) {
        Ok(generator) => generator,
        Err(e) => {
            log::error!("❌ Failed to initialize OpenImagen: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🎨 Generating image for: {}", request.headline);
    let response = generator.generate_image(&request).await;

    match response.image_bytes() {
        Some(bytes) if response.success => {
            fs::write(&output, bytes)?;
            log::info!(
                "✅ Generated in {:.1} seconds",
                response.generation_time_seconds
            );
            log::info!("📸 Image saved as: {}", output);
            if let Some(scene) = &response.scene_description {
                log::info!("🎬 Scene ({:?}): {}", response.scene_strategy, scene);
            }
            log::info!("📝 Alt text: {}", response.alt_text);
            Ok(())
        }
        _ => {
            let error = response.error.clone().unwrap_or_default();
            log::error!("❌ Generation failed: {}", error);
            Err(error.into())
        }
    }
}
