use {crate::prelude::*, colored::ColoredString};

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-".truecolor(100, 100, 100)
}

/// Print the title of the currently executed command to the given writer.
#[macro_export]
macro_rules! command_title {
    ($out:expr, $($args:tt)*) => {
        writeln!(
            $out,
            "\n{arrow} {title}{separator}",
            arrow = "▶".bold().purple(),
            title = format!($($args)*).bold(),
            separator = $crate::display::separator()
        )
    };
}

/// Notify the user of a successful operation. Basically [`writeln!`] with
/// some success formatting.
#[macro_export]
macro_rules! notify_success {
    ($out:expr, $($args:tt)*) => {
        writeln!(
            $out,
            "[{check}] {msg}",
            check = "✔".green().bold(),
            msg = format!($($args)*)
        )
    };
}

/// Similar to [`notify_success!`] but for errors. Callers pass the error
/// stream as `$out`.
#[macro_export]
macro_rules! notify_error {
    ($out:expr, $($args:tt)*) => {
        writeln!(
            $out,
            "[{ballot}] {msg}",
            ballot = "✘".red().bold(),
            msg = format!($($args)*)
        )
    };
}

/// Formatted list item.
#[macro_export]
macro_rules! item {
    ($out:expr, $($args:tt)*) => {
        writeln!(
            $out,
            "    {arrow} {item}",
            arrow = "▶".truecolor(100, 100, 100),
            item = format!($($args)*)
        )
    };
}

/// Section heading used by the reports, e.g. `💰 Market Data`.
pub(crate) fn section<W: Write>(out: &mut W, icon: &str, title: &str) -> std::io::Result<()> {
    writeln!(out, "\n{icon} {}", title.bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count() + 3))
}
