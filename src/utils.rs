use anyhow::Context;
use secrecy::SecretString;

/// Use the token given on the command line or in the environment, falling back to
/// the systemd credential called `credential`.
pub(crate) fn resolve_secret(
    value: Option<String>,
    credential: &str,
) -> anyhow::Result<SecretString> {
    value
        .map(SecretString::from)
        .ok_or(())
        .or_else(|()| get_credential(credential))
        .with_context(|| format!("no {credential} configured"))
}

/// Get a systemd credential (see <https://systemd.io/CREDENTIALS/>).
#[cfg(target_os = "linux")]
pub(crate) fn get_credential(name: &str) -> anyhow::Result<SecretString> {
    use libsystemd::credentials::CredentialsLoader;
    use std::io::{BufReader, Read};

    let loader = CredentialsLoader::open()?;
    let file = loader.get(name)?;
    let mut buffer = String::new();
    let mut reader = BufReader::new(file);
    reader.read_to_string(&mut buffer)?;
    Ok(buffer.trim_end().to_owned().into())
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn get_credential(name: &str) -> anyhow::Result<SecretString> {
    anyhow::bail!("cannot read credential {name}: systemd credentials need Linux")
}
