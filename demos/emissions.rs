//! Render the four-sector emissions breakdown to stdout.
//!
//! ```sh
//! cargo run --example emissions > emissions.svg
//! RUST_LOG=debug cargo run --example emissions --features tracing > emissions.svg
//! ```

use sunburst::{ChartConfig, ProportionNode, render_svg};
use tracing_subscriber::EnvFilter;

fn emissions() -> Vec<ProportionNode> {
    vec![
        ProportionNode::with_children(
            "energy",
            "Energy",
            73.2,
            vec![
                ProportionNode::with_children(
                    "electricity-heat",
                    "Electricity & Heat",
                    42.0,
                    vec![
                        ProportionNode::new("coal-power", "Coal Power", 60.0),
                        ProportionNode::new("gas-power", "Gas Power", 30.0),
                        ProportionNode::new("oil-power", "Oil Power", 10.0),
                    ],
                ),
                ProportionNode::with_children(
                    "transport",
                    "Transport",
                    22.0,
                    vec![
                        ProportionNode::new("road", "Road", 74.0),
                        ProportionNode::new("aviation", "Aviation", 12.0),
                        ProportionNode::new("shipping", "Shipping", 11.0),
                        ProportionNode::new("rail", "Rail", 3.0),
                    ],
                ),
                ProportionNode::new("buildings", "Buildings", 15.0),
                ProportionNode::new("industrial-energy", "Industrial Energy", 14.0),
                ProportionNode::new("fugitive", "Fugitive Emissions", 7.0),
            ],
        ),
        ProportionNode::with_children(
            "agriculture",
            "Agriculture, Forestry & Land Use",
            18.4,
            vec![
                ProportionNode::new("livestock", "Livestock & Manure", 42.0),
                ProportionNode::new("soils", "Agricultural Soils", 27.0),
                ProportionNode::new("deforestation", "Deforestation", 21.0),
                ProportionNode::new("crop-burning", "Crop Burning", 10.0),
            ],
        ),
        ProportionNode::with_children(
            "industry",
            "Industry",
            5.2,
            vec![
                ProportionNode::new("cement", "Cement", 58.0),
                ProportionNode::new("chemicals", "Chemicals", 42.0),
            ],
        ),
        ProportionNode::with_children(
            "waste",
            "Waste",
            3.2,
            vec![
                ProportionNode::new("landfills", "Landfills", 60.0),
                ProportionNode::new("wastewater", "Wastewater", 40.0),
            ],
        ),
    ]
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let svg = render_svg(&emissions(), &ChartConfig::default()).map_err(miette::Report::new)?;
    tracing::info!(bytes = svg.len() as u64, "rendered sunburst");
    println!("{svg}");
    Ok(())
}
