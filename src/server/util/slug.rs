//! Slug derivation and uniqueness resolution.
//!
//! A slug is the URL-path-safe identifier derived from a human-readable
//! name. Derivation is pure; uniqueness is resolved against the owning
//! table through a caller-supplied existence probe so the suffixing loop is
//! written once and shared by pages, products and services.

use std::future::Future;

use sea_orm::DbErr;

/// Top-level routes owned by the application shell. A page may never take
/// one of these as its slug; the conflict is reported as a distinct
/// validation class instead of being suffixed away.
pub const RESERVED_ROUTES: &[&str] = &[
    "/",
    "/home",
    "/products",
    "/services",
    "/cases",
    "/about",
    "/contact",
    "/admin",
    "/login",
    "/register",
];

/// Checks a slug against the reserved route list.
pub fn is_reserved(slug: &str) -> bool {
    let path = format!("/{}", slug.trim_start_matches('/'));
    RESERVED_ROUTES.contains(&path.as_str())
}

/// Derives a URL-safe slug from a human-readable name.
///
/// The result contains only lowercase ASCII letters, digits and hyphens:
/// Cyrillic characters are transliterated, every other run of characters
/// collapses into a single hyphen, and no hyphen appears at either end.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if let Some(t) = transliterate(c) {
            out.push_str(t);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }

    out.trim_end_matches('-').to_string()
}

/// Resolves a unique slug by probing suffixed candidates sequentially.
///
/// Returns `base` unchanged when it is free, otherwise tries `base-1`,
/// `base-2`, … until the probe reports a free candidate. The probe closes
/// over the repository and, on updates, the id of the row being renamed so
/// a row never collides with itself.
///
/// The check-then-write window is not atomic; the unique column constraint
/// is the backstop for two writers racing the same name (see DESIGN.md).
pub async fn resolve_unique<F, Fut>(base: &str, exists: F) -> Result<String, DbErr>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<bool, DbErr>>,
{
    if !exists(base.to_string()).await? {
        return Ok(base.to_string());
    }

    let mut counter = 1u32;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        counter += 1;
    }
}

/// Transliterates a single Cyrillic character into its Latin spelling.
///
/// Hard and soft signs map to the empty string; characters outside the
/// table return `None` and fall through to hyphen collapsing.
fn transliterate(c: char) -> Option<&'static str> {
    let t = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };

    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_ascii_names() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Spaced   out  "), "spaced-out");
        assert_eq!(slugify("Already-Slugged"), "already-slugged");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("What?! A page..."), "what-a-page");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn transliterates_cyrillic() {
        assert_eq!(slugify("Продукты"), "produkty");
        assert_eq!(slugify("Как это работает"), "kak-eto-rabotaet");
        assert_eq!(slugify("Объём"), "obem");
    }

    #[test]
    fn output_is_lowercase_ascii_only() {
        for name in ["Crème brûlée", "Ünïcode—dashes", "42 Things!", "тест 5"] {
            let slug = slugify(name);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in slug {:?}",
                slug
            );
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
        }
    }

    #[test]
    fn recognizes_reserved_routes() {
        assert!(is_reserved("products"));
        assert!(is_reserved("admin"));
        assert!(!is_reserved("products-overview"));
        assert!(!is_reserved("my-page"));
    }

    #[tokio::test]
    async fn resolve_unique_returns_base_when_free() {
        let slug = resolve_unique("free", |_| async { Ok(false) }).await.unwrap();
        assert_eq!(slug, "free");
    }

    #[tokio::test]
    async fn resolve_unique_suffixes_sequentially() {
        // "taken" and "taken-1" are occupied, "taken-2" is the first free slot.
        let slug = resolve_unique("taken", |candidate| async move {
            Ok(candidate == "taken" || candidate == "taken-1")
        })
        .await
        .unwrap();
        assert_eq!(slug, "taken-2");
    }
}
