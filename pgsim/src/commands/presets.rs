use crate::{AppConfig, preset::SliderRange};
use std::io::Write;

/// Lists every configured category with its defaults, ranges and discount grid
pub fn list_presets(config: &AppConfig, buffer: &mut impl Write) -> anyhow::Result<()> {
    for (i, (key, preset)) in config.presets.iter().enumerate() {
        if i > 0 {
            writeln!(buffer)?;
        }
        writeln!(buffer, "{key}: {}", preset.label)?;
        slider(buffer, "Base Demand (units)", &preset.base_demand)?;
        slider(buffer, "Barilla Wholesale Price (€)", &preset.wholesale_price)?;
        slider(buffer, "Barilla COGS (€)", &preset.cogs)?;
        slider(buffer, "Own Price Elasticity", &preset.own_elasticity)?;
        slider(buffer, "Cross Price Elasticity", &preset.cross_elasticity)?;
        let discounts = &preset.discounts;
        writeln!(
            buffer,
            "  {:<30} {} to {} by {} (exclusive)",
            "Trade Discounts (€)", discounts.start, discounts.stop, discounts.step
        )?;
    }
    Ok(())
}

fn slider(buffer: &mut impl Write, name: &str, range: &SliderRange) -> std::io::Result<()> {
    writeln!(
        buffer,
        "  {:<30} {} (range {} to {}, step {})",
        name, range.default, range.min, range.max, range.step
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_category() {
        let mut buffer = Vec::new();
        list_presets(&AppConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("pasta_core: Pasta (Core)\n"));
        assert!(text.contains("\npasta_premium: Pasta (Premium)\n"));
        assert!(text.contains("\nsauces: Sauces\n"));
        assert!(text.contains("Base Demand (units)"));
        assert!(text.contains("18000 (range 5000 to 40000, step 1000)"));
        assert!(text.contains("-2.2 (range -3 to -0.9, step 0.1)"));
    }
}
