//! URL slugs for category names.

/// Convert `text` into a lowercase, hyphen separated slug.
///
/// Accented Latin letters are folded to ASCII, `@` is spelled out as `at`,
/// whitespace, hyphens and underscores separate words, and any other
/// punctuation is dropped.
///
/// ```
/// use category_admin::slugify;
///
/// assert_eq!(slugify("Electronics & Gadgets"), "electronics-gadgets");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c == '@' {
            push_word(&mut slug, "at", true);
            pending_separator = true;
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            let mut buffer = [0; 4];
            let word = c.to_ascii_lowercase().encode_utf8(&mut buffer);
            push_word(&mut slug, word, pending_separator);
            pending_separator = false;
        } else if let Some(folded) = fold_to_ascii(c) {
            push_word(&mut slug, folded, pending_separator);
            pending_separator = false;
        }
    }

    slug
}

fn push_word(slug: &mut String, word: &str, separate: bool) {
    if separate && !slug.is_empty() {
        slug.push('-');
    }

    slug.push_str(word);
}

/// The ASCII spelling of common accented Latin letters, in lowercase.
fn fold_to_ascii(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        _ => return None,
    };

    Some(folded)
}
