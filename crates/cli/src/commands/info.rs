//! Print the numeric configuration the binary was built with

use anyhow::Result;
use s16math::format::Fixed;
use s16math::{Resolution, Scale};

fn resolution_line(label: &str, r: Resolution) {
    println!(
        "  {:<8} 1/{:<5} ({} digits after the point)",
        label, r.denominator, r.width
    );
}

/// Describe scale policy `S`
pub fn execute<S: Scale>() -> Result<()> {
    let title = format!("Scale policy: {}", S::NAME);
    println!("{}", title);
    println!("{}", "─".repeat(title.chars().count()));
    println!();

    println!("Resolutions:");
    resolution_line("number", S::NUMBER);
    resolution_line("degree", S::DEGREE);
    resolution_line("radian", S::RADIAN);
    resolution_line("cordic", S::CORDIC);
    println!();

    println!("Range:");
    println!(
        "  number   {} .. {}",
        Fixed::<S>::number(i16::MIN),
        Fixed::<S>::number(i16::MAX)
    );
    println!(
        "  radian   {} .. {}",
        Fixed::<S>::radians(i16::MIN),
        Fixed::<S>::radians(i16::MAX)
    );
    println!();

    println!("Constants:");
    println!("  pi       {}", Fixed::<S>::radians(S::PI));
    println!("  e        {}", Fixed::<S>::number(S::E));
    println!("  ln 10    {}", Fixed::<S>::number(S::LN10));
    println!("  deg/rad  {}", Fixed::<S>::degrees(S::DEG_PER_RAD));
    println!("  rad/deg  {}", Fixed::<S>::radians(S::RAD_PER_DEG));
    println!("  nan      {}", Fixed::<S>::number(S::NAN));
    println!();

    println!("CORDIC iterations: {}", S::CORDIC_ANGLES.len());

    Ok(())
}
