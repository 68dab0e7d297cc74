use crate::errors::AppError;

/// Converts a title into a URL-safe slug.
///
/// Latin letters with diacritics fold to their ASCII base, other non-ASCII
/// characters are dropped, everything is lowercased, and runs of whitespace
/// or hyphens collapse to a single `-`.
pub fn slugify(title: &str) -> String {
    let mut folded = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii() {
            folded.push(c);
        } else if let Some(base) = fold_diacritic(c) {
            folded.push_str(base);
        }
    }

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.to_ascii_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c == '-' || c.is_ascii_whitespace() {
            pending_dash = true;
        }
    }
    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Uses `explicit` when it is non-blank, otherwise derives the slug from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, AppError> {
    let source = match explicit.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => title,
    };
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(AppError::Validation(
            "slug: could not derive a URL slug; provide one explicitly".to_string(),
        ));
    }
    Ok(slug)
}

fn fold_diacritic(c: char) -> Option<&'static str> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ō' => "O",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ś' | 'š' => "s",
        'Ś' | 'Š' => "S",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ř' => "r",
        'Ř' => "R",
        'ł' => "l",
        'Ł' => "L",
        _ => return None,
    };
    Some(base)
}
