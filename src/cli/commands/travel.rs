use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::travel::estimate_for_selection;
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Travel {
        from,
        to,
        speed,
        leg,
    } = cmd
    {
        let current: Coordinate = from.parse()?;
        let selected: Coordinate = to.parse()?;
        let speed = speed.unwrap_or(cfg.average_speed_kmh);

        let estimate = estimate_for_selection(Some(&current), (*leg).into(), &selected, speed)?;
        if let Some(estimate) = estimate {
            println!("Distance: {:.2} km", estimate.distance_km);
            println!("ETA: {} min", estimate.eta_minutes);
            messages::info(estimate.advisory());
        }
    }
    Ok(())
}
