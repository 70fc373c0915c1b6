//! `gcloud run deploy` argument construction.
//!
//! Values are interpolated verbatim. The only rewriting is gcloud's own
//! alternate-delimiter syntax, needed when a forwarded value contains a comma.

use runenv_core::DeploySpec;

/// Delimiters tried, in order, when `,` cannot separate the pairs.
const ALT_DELIMITERS: &[&str] = &["@", "|", ";", ":", "#", "%", "~", "+"];

/// Arguments (without the program name) for one deploy.
///
/// # Examples
///
/// ```
/// use runenv_cloud::command::deploy_args;
/// use runenv_core::{DeployConfig, DeploySpec, Environment};
///
/// let env = Environment::from_pairs([
///     ("SERVICE_NAME", "foo"),
///     ("GOOGLE_CLOUD_LOCATION", "us-central1"),
/// ]);
/// let args = deploy_args(&DeploySpec::resolve(&env, &DeployConfig::default()));
///
/// assert_eq!(&args[..3], ["run", "deploy", "foo"]);
/// assert!(args.windows(2).any(|w| w == ["--region", "us-central1"]));
/// ```
pub fn deploy_args(spec: &DeploySpec) -> Vec<String> {
    let mut args: Vec<String> = [
        "run",
        "deploy",
        &spec.target.service_name,
        "--source",
        &spec.source,
        "--region",
        &spec.target.region,
        "--project",
        &spec.target.project,
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect();

    if spec.allow_unauthenticated {
        args.push("--allow-unauthenticated".to_owned());
    }
    args.push(format!("--port={}", spec.port));

    if !spec.env_vars.is_empty() {
        args.push(format!("--set-env-vars={}", env_vars_flag(&spec.env_vars)));
    }

    args
}

/// Value for `--set-env-vars`: `KEY=VALUE` pairs joined by `,`.
///
/// If any key or value contains a comma, the list is written as
/// `^D^KEY=VALUE D KEY=VALUE...` with the first delimiter `D` that occurs in
/// no pair.
pub fn env_vars_flag(pairs: &[(String, String)]) -> String {
    let joined = |sep: &str| {
        pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(sep)
    };

    let needs_escape = pairs
        .iter()
        .any(|(k, v)| k.contains(',') || v.contains(','));
    if !needs_escape {
        return joined(",");
    }

    let delim = pick_delimiter(pairs);
    format!("^{delim}^{}", joined(&delim))
}

fn pick_delimiter(pairs: &[(String, String)]) -> String {
    let unused = |d: &str| {
        !d.contains('^') && pairs.iter().all(|(k, v)| !k.contains(d) && !v.contains(d))
    };

    if let Some(d) = ALT_DELIMITERS.iter().find(|d| unused(d)) {
        return (*d).to_owned();
    }

    // Every single-character candidate occurs somewhere; lengthen until free.
    let mut delim = "@@".to_owned();
    while !unused(delim.as_str()) {
        delim.push('@');
    }
    delim
}

/// One-line POSIX shell rendering of `program args...`, for display only.
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.,/:=@%+".contains(c));
    if plain {
        s.to_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
