pub const APK_SUFFIX: &str = ".apk";
pub const NAME_PREFIX: &str = "Raylib";
pub const YEAR_SUFFIX: &str = "2026";
pub const LITE_SUFFIX: &str = "Lite";

/// Legacy titles ported before the `2026` naming convention existed.
pub const CLASSIC_NAMES: [&str; 7] = [
    "RaylibBattleCity",
    "RaylibMinesweeper",
    "RaylibContra1987Lite",
    "RaylibSuperMario1985Lite",
    "RaylibFighter97Lite",
    "RaylibJackal1988Lite",
    "RaylibBomberman1983Lite",
];

#[must_use]
pub fn is_classic(name: &str) -> bool {
    CLASSIC_NAMES.contains(&name)
}

/// Names not matching either rule are dropped from the catalog.
#[must_use]
pub fn is_accepted(name: &str) -> bool {
    name.ends_with(YEAR_SUFFIX) || is_classic(name)
}

/// Strips `.apk` from an object key. Keys with other extensions yield `None`.
#[must_use]
pub fn strip_apk_suffix(key: &str) -> Option<&str> {
    key.strip_suffix(APK_SUFFIX)
}

/// Human-readable title: `RaylibSuperMario1985Lite` -> `Super Mario1985`.
#[must_use]
pub fn display_name(name: &str) -> String {
    let name = name.strip_prefix(NAME_PREFIX).unwrap_or(name);
    let name = name.strip_suffix(YEAR_SUFFIX).unwrap_or(name);
    let name = name.strip_suffix(LITE_SUFFIX).unwrap_or(name);

    let mut out = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        out.push(c);
    }

    out.trim().to_string()
}
