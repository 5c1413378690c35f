use std::fmt::Write;

use anyhow::{Result, anyhow, bail};
use diagnostics::log_debug;

use super::{
    cat_command, list_command, mkdir_command, remove_command, rename_command, stat_command,
    touch_command, tree_command, write_command,
};
use crate::common::ShellContext;
use crate::error_utils::describe_error;

const USAGE: &str = "commands: ls [-l] [PATH] | cat PATH | write PATH [TEXT] | append PATH [TEXT] | \
touch PATH | mkdir PATH | mv SRC DST | rm [-r] PATH | stat [--json] PATH | tree [PATH]";

/// Split off the first whitespace-delimited word
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

/// Pull a leading flag such as `-l` off the arguments
fn take_flag<'a>(args: &'a str, flag: &str) -> (bool, &'a str) {
    let (first, rest) = next_word(args);
    if first == flag { (true, rest) } else { (false, args) }
}

fn required<'a>(word: &'a str, what: &str, verb: &str) -> Result<&'a str> {
    if word.is_empty() {
        return Err(anyhow!("{verb}: missing {what}"));
    }
    Ok(word)
}

fn or_root(word: &str) -> &str {
    if word.is_empty() { "/" } else { word }
}

/// Execute one shell line. Blank lines and `#` comments do nothing.
pub async fn run_line(ctx: &ShellContext, line: &str, output: &mut String) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    let (verb, args) = next_word(line);
    log_debug!("Shell command {verb}", verb: verb);

    match verb {
        "ls" => {
            let (long, args) = take_flag(args, "-l");
            list_command(ctx, or_root(next_word(args).0), long, output).await
        }
        "cat" => cat_command(ctx, required(next_word(args).0, "PATH", verb)?, output).await,
        "write" | "append" => {
            let (path, text) = next_word(args);
            let path = required(path, "PATH", verb)?;
            // Text gets a trailing newline; no text at all writes nothing
            let text = if text.is_empty() { String::new() } else { format!("{text}\n") };
            write_command(ctx, path, &text, verb == "append").await
        }
        "touch" => touch_command(ctx, required(next_word(args).0, "PATH", verb)?).await,
        "mkdir" => mkdir_command(ctx, required(next_word(args).0, "PATH", verb)?).await,
        "mv" => {
            let (source, rest) = next_word(args);
            let (destination, _) = next_word(rest);
            rename_command(
                ctx,
                required(source, "SRC", verb)?,
                required(destination, "DST", verb)?,
            )
            .await
        }
        "rm" => {
            let (force, args) = take_flag(args, "-r");
            remove_command(ctx, required(next_word(args).0, "PATH", verb)?, force).await
        }
        "stat" => {
            let (json, args) = take_flag(args, "--json");
            stat_command(ctx, required(next_word(args).0, "PATH", verb)?, json, output).await
        }
        "tree" => tree_command(ctx, or_root(next_word(args).0), output).await,
        "help" => {
            writeln!(output, "{USAGE}")?;
            Ok(())
        }
        other => bail!("Unknown command '{other}'. {USAGE}"),
    }
}

/// Run every line of `script`, reporting failures inline and carrying on.
/// Returns the number of lines that failed.
pub async fn run_script(ctx: &ShellContext, script: &str, output: &mut String) -> Result<usize> {
    let mut failures = 0;
    for (index, line) in script.lines().enumerate() {
        if let Err(err) = run_line(ctx, line, output).await {
            failures += 1;
            writeln!(output, "error: line {}: {}", index + 1, describe_error(&err))?;
        }
    }
    Ok(failures)
}
