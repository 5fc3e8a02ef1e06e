use crate::config::{load_token_overrides, TokenOverrides};
use crate::tokens::TokenStore;

pub(super) struct AppBootstrap {
    pub(super) tokens: TokenStore,
}

pub(super) fn bootstrap_app_runtime() -> AppBootstrap {
    let overrides = load_or_default_token_overrides();
    AppBootstrap {
        tokens: registry_with_overrides(&overrides),
    }
}

fn load_or_default_token_overrides() -> TokenOverrides {
    load_token_overrides().unwrap_or_else(|err| {
        tracing::warn!(?err, "failed to load token config; using defaults");
        TokenOverrides::default()
    })
}

pub(super) fn registry_with_overrides(overrides: &TokenOverrides) -> TokenStore {
    let mut tokens = TokenStore::with_defaults();
    if overrides.is_empty() {
        return tokens;
    }

    let report = overrides.apply(&mut tokens);
    tracing::info!(
        applied = report.applied.len(),
        unknown = ?report.unknown,
        invalid = ?report.invalid,
        "loaded token overrides"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{names, resolve_ms};

    #[test]
    fn registry_without_overrides_matches_defaults() {
        let tokens = registry_with_overrides(&TokenOverrides::default());
        assert_eq!(tokens, TokenStore::with_defaults());
    }

    #[test]
    fn registry_applies_known_overrides() {
        let overrides =
            TokenOverrides::parse(r#"{"BOTTOM_SHEET_ENTER_DURATION": "640ms", "NOPE": 1}"#)
                .unwrap();
        let tokens = registry_with_overrides(&overrides);

        assert_eq!(resolve_ms(&tokens, names::ENTER_DURATION, 0), 640);
        assert!(!tokens.contains("NOPE"));
    }
}
