//! Plain-text and JSON renderings of a [`DerivedView`].

use std::fmt::{self, Write};

use dashboard_core::{CurrentView, DerivedView};
use serde_json::{Value, json};

pub fn render(view: &DerivedView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &DerivedView) -> fmt::Result {
    let [from, via, to] = view.theme.gradient();

    writeln!(out)?;
    writeln!(out, "  theme: {} ({from} → {via} → {to})", view.theme)?;

    match &view.current {
        None => writeln!(out, "  Enter a location to see its weather.")?,
        Some(current) => write_current(out, current)?,
    }

    writeln!(out)
}

fn write_current(out: &mut String, current: &CurrentView) -> fmt::Result {
    let snap = &current.snapshot;
    let now = &snap.current;
    let unit = current.temperatures.unit.symbol();

    writeln!(out, "  {}  {}", current.icon.glyph(), snap.location.display_name())?;
    if !snap.location.region.is_empty() {
        writeln!(out, "     {}", snap.location.region)?;
    }
    match snap.location.local_time() {
        Some(t) => writeln!(out, "     Local time: {}", t.format("%a %-d %b %H:%M"))?,
        None => writeln!(out, "     Local time: {}", snap.location.localtime)?,
    }

    writeln!(out)?;
    writeln!(
        out,
        "  {}{unit}  {}  (feels like {}{unit})",
        current.temperatures.temperature, now.condition.text, current.temperatures.feels_like
    )?;

    writeln!(out)?;
    writeln!(out, "  {:<12}{} km/h {}", "Wind", now.wind_kph.round(), now.wind_dir)?;
    writeln!(out, "  {:<12}{}%", "Humidity", now.humidity)?;
    writeln!(out, "  {:<12}{} mb", "Pressure", now.pressure_mb.round())?;
    writeln!(out, "  {:<12}{} km", "Visibility", now.vis_km)?;
    writeln!(out, "  {:<12}{}", "UV index", now.uv)?;

    writeln!(out)?;
    writeln!(out, "  Air quality: {}", current.air_quality)?;
    for (label, value) in now.air_quality.pollutants() {
        writeln!(out, "    {label:<6}{value:>8.1}")?;
    }
    Ok(())
}

pub fn to_json(view: &DerivedView) -> Value {
    let current = view.current.as_ref().map(|current| {
        json!({
            "snapshot": &*current.snapshot,
            "icon": current.icon,
            "temperature": current.temperatures.temperature,
            "feels_like": current.temperatures.feels_like,
            "air_quality": current.air_quality,
        })
    });

    json!({
        "theme": view.theme,
        "unit": view.unit,
        "query": view.query,
        "current": current,
    })
}
