use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["NETMEG_LOG", "RUST_LOG"];

/// Installs the global subscriber on stderr, leaving stdout to result blocks.
///
/// The first of `NETMEG_LOG` and `RUST_LOG` that holds a valid directive
/// wins. Without one, netmeg logs at `info` (`debug` when verbose) while
/// dependencies such as hyper and reqwest stay at `warn`.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(resolve_filter(verbose))
        .with_ansi(!no_color)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn resolve_filter(verbose: bool) -> EnvFilter {
    LOG_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,netmeg=debug"
    } else {
        "warn,netmeg=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_verbosity_to_netmeg() -> Result<(), String> {
        if default_directive(false) != "warn,netmeg=info" {
            return Err(format!("Unexpected default: {}", default_directive(false)));
        }
        if default_directive(true) != "warn,netmeg=debug" {
            return Err(format!("Unexpected verbose: {}", default_directive(true)));
        }
        Ok(())
    }

    #[test]
    fn default_directives_parse() -> Result<(), String> {
        for verbose in [false, true] {
            EnvFilter::try_new(default_directive(verbose))
                .map_err(|err| format!("directive rejected: {}", err))?;
        }
        Ok(())
    }

    #[test]
    fn init_logging_tolerates_repeat_calls() {
        init_logging(true, true);
        init_logging(false, false);
    }
}
