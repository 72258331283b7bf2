use clap::Parser;
use color_convert::adapters::api::{HexResponse, RgbResponse};
use color_convert::utils::logger;
use color_convert::utils::validation::{parse_channel, Validate};
use color_convert::{hex_to_rgb, rgb_to_hex, CliConfig, Result};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting color-convert CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數組合
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&config) {
        Ok(output) => {
            tracing::info!("✅ Conversion completed");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<String> {
    if let Some(hex) = &config.hex {
        let rgb = hex_to_rgb(hex)?;
        if config.json {
            let body = RgbResponse {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            };
            return Ok(serde_json::to_string(&body)?);
        }
        return Ok(format!("{} {} {}", rgb.r, rgb.g, rgb.b));
    }

    // 通道以字串傳入，逐一解析後再轉換
    let r = parse_channel(&config.rgb[0])?;
    let g = parse_channel(&config.rgb[1])?;
    let b = parse_channel(&config.rgb[2])?;
    let hex = rgb_to_hex(r, g, b)?;

    if config.json {
        return Ok(serde_json::to_string(&HexResponse { hex })?);
    }
    Ok(hex)
}
