use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a legend or player sprite key cannot name a file under the sprite root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteKeyError {
    #[error("sprite key is empty")]
    Empty,
    #[error("sprite key must be relative, found leading '/'")]
    Absolute,
    #[error("sprite key segment is empty or escapes the sprite root")]
    BadSegment,
    #[error("sprite key contains '{character}'; allowed are a-z, 0-9, '_', '-' and '/'")]
    InvalidCharacter { character: char },
}

/// Keys are lowercase slash-separated names such as `tiles/grass`.
pub(crate) fn validate_sprite_key(key: &str) -> Result<(), SpriteKeyError> {
    if key.is_empty() {
        return Err(SpriteKeyError::Empty);
    }
    if key.starts_with('/') {
        return Err(SpriteKeyError::Absolute);
    }
    // Traversal is reported as such before the character rules reject its dots.
    if key.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return Err(SpriteKeyError::BadSegment);
    }
    if let Some(character) = key
        .chars()
        .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '-' | '/')))
    {
        return Err(SpriteKeyError::InvalidCharacter { character });
    }
    Ok(())
}

/// `<sprite_root>/<key>.png` for a valid key.
pub(crate) fn sprite_image_path(sprite_root: &Path, key: &str) -> Result<PathBuf, SpriteKeyError> {
    validate_sprite_key(key)?;
    let mut path = sprite_root.to_path_buf();
    for segment in key.split('/') {
        path.push(segment);
    }
    path.set_extension("png");
    Ok(path)
}
