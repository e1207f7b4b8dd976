use mochimobileos_textures::{config, icon, logger, storage, TextureError};

fn main() -> Result<(), TextureError> {
    println!("Creating smartphone texture...");

    let texture = icon::generate_smartphone_texture();
    let output_path = config::output_path();

    if let Err(e) = storage::save_texture(&texture, &output_path) {
        logger::log_error("save texture", &e);
        return Err(e);
    }

    println!("Smartphone texture saved to: {}", output_path.display());
    println!(
        "Texture size: {}x{} pixels",
        icon::TEXTURE_SIZE,
        icon::TEXTURE_SIZE
    );
    Ok(())
}
