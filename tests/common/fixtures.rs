//! Reusable legacy settings file contents for integration tests.

/// Peppers and secret keys only; both locale fields absent so the
/// defaults apply.
pub const LEGACY_MINIMAL: &str = concat!(
    "SCRYPT_ID_PEPPER = 'idp'\n",
    "SCRYPT_GPG_PEPPER = 'gpgp'\n",
    "\n",
    "class SourceInterfaceFlaskConfig:\n",
    "    SECRET_KEY = 'sk1'\n",
    "\n",
    "class JournalistInterfaceFlaskConfig:\n",
    "    SECRET_KEY = 'sk2'\n",
);

/// Complete legacy file with explicit locales and the kind of noise a
/// real settings module carries.
pub const LEGACY_WITH_LOCALES: &str = concat!(
    "import os\n",
    "\n",
    "# generated during install\n",
    "SCRYPT_ID_PEPPER = 'idp'\n",
    "SCRYPT_GPG_PEPPER = 'gpgp'\n",
    "SCRYPT_PARAMS = dict(N=2**14, r=8, p=1)\n",
    "\n",
    "DEFAULT_LOCALE = 'fr_FR'\n",
    "SUPPORTED_LOCALES = [\n",
    "    'fr_FR',\n",
    "    'en_US',\n",
    "]\n",
    "\n",
    "class SourceInterfaceFlaskConfig:\n",
    "    SECRET_KEY = 'sk1'\n",
    "\n",
    "class JournalistInterfaceFlaskConfig:\n",
    "    SECRET_KEY = 'sk2'\n",
);
