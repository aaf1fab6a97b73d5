//! Line-oriented menu front end. Reads from any `BufRead` so it can be
//! driven from a script or a test as well as a terminal.

use anyhow::Result;
use pkg_constants::azure::{ENVIRONMENTS, REGIONS};
use pkg_naming::{NameEngine, NameRequest};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::{TokenDefaults, scope_label};

pub(crate) fn run<R: BufRead, W: Write>(
    engine: &NameEngine<'_>,
    defaults: &TokenDefaults,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Cloud Adoption Framework Name Generator")?;
    loop {
        let Some(key) = choose_resource_type(engine, &mut input, &mut out)? else {
            return Ok(());
        };
        let spec = engine.registry().get(&key)?.spec();

        writeln!(out)?;
        writeln!(out, "Enter resource details for {}", spec.name())?;

        let Some(workload) = prompt(&mut input, &mut out, "Workload/Application name", None)?
        else {
            return Ok(());
        };

        writeln!(out, "  Environments: {}", ENVIRONMENTS[..5].join(", "))?;
        let Some(environment) = prompt(
            &mut input,
            &mut out,
            "Environment",
            defaults.environment.as_deref(),
        )?
        else {
            return Ok(());
        };

        let mut region = String::new();
        if spec.is_regional() {
            writeln!(out, "  Examples: {}", REGIONS[..4].join(", "))?;
            match prompt(
                &mut input,
                &mut out,
                "Azure region",
                defaults.region.as_deref(),
            )? {
                Some(r) => region = r,
                None => return Ok(()),
            }
        }

        let Some(instance) = prompt(
            &mut input,
            &mut out,
            "Instance number",
            Some(&defaults.instance),
        )?
        else {
            return Ok(());
        };

        let request = NameRequest {
            workload: &workload,
            environment: &environment,
            region: &region,
            instance: &instance,
        };
        let generated = engine.generate_and_validate(&key, &request)?;
        debug!("Interactive result: {:?}", generated);

        writeln!(out)?;
        writeln!(out, "Resource Type:  {}", spec.name())?;
        writeln!(out, "Generated Name: {}", generated.name)?;
        writeln!(out, "Length:         {} chars", generated.length)?;
        writeln!(out, "Scope:          {}", scope_label(spec))?;
        writeln!(out, "Pattern:        {}", spec.pattern_template())?;
        match &generated.outcome.reason {
            None => writeln!(out, "Validation:     passed")?,
            Some(reason) => writeln!(out, "Validation:     FAILED ({})", reason)?,
        }
        writeln!(out)?;

        write!(out, "Generate another? (y/n): ")?;
        out.flush()?;
        match read_line(&mut input)? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {}
            _ => return Ok(()),
        }
    }
}

/// Show the numbered menu and return the chosen key, or `None` to exit.
fn choose_resource_type<R: BufRead, W: Write>(
    engine: &NameEngine<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    let registry = engine.registry();
    writeln!(out)?;
    writeln!(out, "Select a resource type:")?;
    for (i, entry) in registry.iter().enumerate() {
        writeln!(out, "  [{}] {}", i + 1, entry.spec().name())?;
    }
    writeln!(out, "  [0] Exit")?;

    loop {
        write!(out, "Enter choice (0-{}): ", registry.len())?;
        out.flush()?;
        let Some(choice) = read_line(input)? else {
            return Ok(None);
        };
        if choice == "0" {
            return Ok(None);
        }
        let selected = choice
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=registry.len()).contains(n))
            .and_then(|n| registry.iter().nth(n - 1));
        match selected {
            Some(entry) => {
                writeln!(out, "Selected: {}", entry.spec().name())?;
                return Ok(Some(entry.spec().key().to_string()));
            }
            None => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Prompt until a non-empty value is entered. An empty answer takes
/// `default` when one is given. Returns `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    loop {
        match default {
            Some(d) => write!(out, "  {} (default: {}): ", label, d)?,
            None => write!(out, "  {}: ", label)?,
        }
        out.flush()?;
        let Some(value) = read_line(input)? else {
            return Ok(None);
        };
        if !value.is_empty() {
            return Ok(Some(value));
        }
        if let Some(d) = default {
            return Ok(Some(d.to_string()));
        }
        writeln!(out, "  Required field.")?;
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
