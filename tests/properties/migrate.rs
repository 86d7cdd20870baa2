//! Migration invariants over randomized legacy settings.

use proptest::prelude::*;
use tempfile::tempdir;

use migrate_config::{Migrator, Outcome, PyConfigSource};

fn secret() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,32}"
}

fn locale() -> impl Strategy<Value = String> {
    "[a-z]{2}_[A-Z]{2}"
}

fn legacy_file(
    idp: &str,
    gpgp: &str,
    sk1: &str,
    sk2: &str,
    locales: Option<&[String]>,
) -> String {
    let mut content = format!(
        "SCRYPT_ID_PEPPER = '{idp}'\nSCRYPT_GPG_PEPPER = '{gpgp}'\n"
    );
    if let Some(locales) = locales {
        let items: Vec<String> = locales.iter().map(|l| format!("'{l}'")).collect();
        content.push_str(&format!("SUPPORTED_LOCALES = [{}]\n", items.join(", ")));
    }
    content.push_str(&format!(
        "class SourceInterfaceFlaskConfig:\n    SECRET_KEY = '{sk1}'\n\
         class JournalistInterfaceFlaskConfig:\n    SECRET_KEY = '{sk2}'\n"
    ));
    content
}

proptest! {
    /// Peppers and secret keys land in the output verbatim, and the
    /// shared values are identical between the two interfaces.
    #[test]
    fn secrets_pass_through_verbatim(
        idp in secret(),
        gpgp in secret(),
        sk1 in secret(),
        sk2 in secret(),
    ) {
        let dir = tempdir().unwrap();
        let legacy = dir.path().join("config.py");
        let dest = dir.path().join("config.json");
        std::fs::write(&legacy, legacy_file(&idp, &gpgp, &sk1, &sk2, None)).unwrap();

        let migrator = Migrator::new(PyConfigSource::new(&legacy), &dest);
        prop_assert_eq!(migrator.run(false).unwrap(), Outcome::Migrated);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();

        prop_assert_eq!(&json["source_interface"]["secret_key"], &serde_json::json!(sk1));
        prop_assert_eq!(&json["journalist_interface"]["secret_key"], &serde_json::json!(sk2));
        for interface in ["source_interface", "journalist_interface"] {
            prop_assert_eq!(&json[interface]["scrypt_id_pepper"], &serde_json::json!(&idp));
            prop_assert_eq!(&json[interface]["scrypt_gpg_pepper"], &serde_json::json!(&gpgp));
        }
        prop_assert_eq!(
            &json["source_interface"]["i18n"],
            &json["journalist_interface"]["i18n"]
        );
    }

    /// Present locale lists pass through unchanged, including order;
    /// an absent list defaults to exactly ["en_US"].
    #[test]
    fn supported_locales_pass_through_or_default(
        idp in secret(),
        gpgp in secret(),
        sk1 in secret(),
        sk2 in secret(),
        locales in proptest::option::of(proptest::collection::vec(locale(), 1..5)),
    ) {
        let dir = tempdir().unwrap();
        let legacy = dir.path().join("config.py");
        let dest = dir.path().join("config.json");
        std::fs::write(
            &legacy,
            legacy_file(&idp, &gpgp, &sk1, &sk2, locales.as_deref()),
        )
        .unwrap();

        let migrator = Migrator::new(PyConfigSource::new(&legacy), &dest);
        prop_assert_eq!(migrator.run(false).unwrap(), Outcome::Migrated);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        let expected = match &locales {
            Some(list) => serde_json::json!(list),
            None => serde_json::json!(["en_US"]),
        };
        prop_assert_eq!(
            &json["source_interface"]["i18n"]["supported_locales"],
            &expected
        );
        prop_assert_eq!(
            &json["source_interface"]["i18n"]["default_locale"],
            &serde_json::json!("en_US")
        );
    }
}
