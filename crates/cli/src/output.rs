use std::{env, io::Write};

use eyre::{eyre, Result};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is the default value (`output`), return `{cwd}/output/{filename}`
/// - if `output` is specified, return `/{output}/{filename}`
pub(crate) fn build_output_path(output: &str, filename: &str) -> Result<String> {
    if output == "output" {
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        return Ok(format!("{}/output/{}", cwd, filename));
    }

    Ok(format!("{}/{}", output.trim_end_matches('/'), filename))
}

/// the default export filename, prefixed with `name` when one is given
pub(crate) fn export_filename(name: &str, date_from: &str, date_to: &str) -> String {
    let filename = format!("transactions-{}-{}.csv", date_from.trim(), date_to.trim());
    if name.is_empty() {
        filename
    } else {
        format!("{}-{}", name, filename)
    }
}

/// pass the input to the `less` command
pub(crate) async fn print_with_less(input: &str) -> Result<()> {
    let mut child =
        std::process::Command::new("less").stdin(std::process::Stdio::piped()).spawn()?;

    let stdin = child.stdin.as_mut().ok_or_else(|| eyre!("unable to get stdin for less"))?;
    stdin.write_all(input.as_bytes())?;

    child.wait()?;
    Ok(())
}
