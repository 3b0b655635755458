//! Blocking terminal configuration dialog.
//!
//! Presents the current video settings and lets the user pick the render
//! system, resolution, and fullscreen mode before the window opens. Reads
//! from any `BufRead` so the flow is testable; an empty line keeps the
//! current value, and end of input accepts whatever is configured.

use std::io::{self, BufRead, Write};

use celeritas_config::Config;

/// Resolutions offered by the dialog.
pub const RESOLUTIONS: &[(u32, u32)] = &[
    (640, 480),
    (800, 600),
    (1024, 768),
    (1280, 720),
    (1920, 1080),
];

/// Run the configuration dialog against the given config.
///
/// Blocks until the user has answered every prompt or the input ends.
pub fn show(
    config: &mut Config,
    render_systems: &[String],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Celeritas configuration")?;
    writeln!(output, "-----------------------")?;

    // Render system.
    writeln!(
        output,
        "Render system (current: {}):",
        config.video.render_system
    )?;
    writeln!(output, "  0) auto")?;
    for (i, name) in render_systems.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, name)?;
    }
    let Some(line) = prompt(input, output)? else {
        return Ok(());
    };
    match parse_render_system(&line, render_systems) {
        Some(system) => config.video.render_system = system,
        None if line.is_empty() => {}
        None => writeln!(
            output,
            "Unknown render system, keeping `{}`",
            config.video.render_system
        )?,
    }

    // Resolution.
    writeln!(
        output,
        "Resolution (current: {}x{}):",
        config.video.resolution_x, config.video.resolution_y
    )?;
    for (i, (w, h)) in RESOLUTIONS.iter().enumerate() {
        writeln!(output, "  {}) {}x{}", i + 1, w, h)?;
    }
    let Some(line) = prompt(input, output)? else {
        return Ok(());
    };
    match parse_resolution(&line) {
        Some((w, h)) => {
            config.video.resolution_x = w;
            config.video.resolution_y = h;
        }
        None if line.is_empty() => {}
        None => writeln!(
            output,
            "Unknown resolution, keeping {}x{}",
            config.video.resolution_x, config.video.resolution_y
        )?,
    }

    // Fullscreen.
    writeln!(
        output,
        "Fullscreen? [y/n] (current: {})",
        if config.video.full_screen { "y" } else { "n" }
    )?;
    let Some(line) = prompt(input, output)? else {
        return Ok(());
    };
    if let Some(full_screen) = parse_yes_no(&line) {
        config.video.full_screen = full_screen;
    }

    writeln!(
        output,
        "Accepted: {} @ {}x{}{}",
        config.video.render_system,
        config.video.resolution_x,
        config.video.resolution_y,
        if config.video.full_screen {
            " (fullscreen)"
        } else {
            ""
        }
    )?;
    Ok(())
}

/// Print the prompt marker and read one trimmed line.
/// Returns `None` at end of input.
fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_render_system(line: &str, render_systems: &[String]) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    if let Ok(index) = line.parse::<usize>() {
        if index == 0 {
            return Some("auto".to_string());
        }
        return render_systems.get(index - 1).cloned();
    }
    if line.eq_ignore_ascii_case("auto") {
        return Some("auto".to_string());
    }
    render_systems
        .iter()
        .find(|s| s.eq_ignore_ascii_case(line))
        .cloned()
}

fn parse_resolution(line: &str) -> Option<(u32, u32)> {
    if line.is_empty() {
        return None;
    }
    if let Ok(index) = line.parse::<usize>() {
        return RESOLUTIONS.get(index.checked_sub(1)?).copied();
    }
    let (w, h) = line.split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn parse_yes_no(line: &str) -> Option<bool> {
    match line.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}
