pub mod analytics;
pub mod blog;
pub mod choices;
pub mod contact;
pub mod education;
pub mod experience;
pub mod project;
pub mod site;
pub mod skill;
pub mod testimonial;

use crate::media::MediaStore;

/// Resolves an optional media key to its public URL.
pub fn media_url(media: &dyn MediaStore, key: Option<&str>) -> Option<String> {
    key.filter(|k| !k.is_empty()).map(|k| media.url(k))
}
