use std::path::PathBuf;

pub const MOD_ID: &str = "mochimobileos";
pub const TEXTURE_NAME: &str = "smartphone";

// Resource root of the Forge module, relative to the repository checkout.
const RESOURCES_DIR: &str = "forge/src/main/resources";

/// Location of an item texture inside the mod's asset tree:
/// `forge/src/main/resources/assets/<mod>/textures/item/<name>.png`
pub fn texture_path(mod_id: &str, name: &str) -> PathBuf {
    PathBuf::from(RESOURCES_DIR)
        .join("assets")
        .join(mod_id)
        .join("textures")
        .join("item")
        .join(format!("{}.png", name))
}

pub fn output_path() -> PathBuf {
    texture_path(MOD_ID, TEXTURE_NAME)
}
