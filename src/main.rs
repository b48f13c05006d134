// ==========================================
// 家畜体重估算系统 - 命令行入口
// ==========================================
// 输出: 计算结果写 stdout (JSON / CSV)
// 日志: 写 stderr, 级别由 RUST_LOG 控制
// ==========================================

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use livestock_weight::config::{config_keys, ConfigManager, LogFormat};
use livestock_weight::domain::SortDirection;
use livestock_weight::export;
use livestock_weight::{i18n, logging, CalculationRequest, CalculatorApi};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "livestock-weight")]
#[command(about = "家畜体重估算 (胸围 + 体长)")]
#[command(version)]
struct Cli {
    /// 配置文件路径
    #[arg(long, global = true, env = "LIVESTOCK_WEIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// 标签语言 (en / id)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// 输出格式
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    /// JSON 格式日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// 品种测量输入
#[derive(Args, Debug, Clone)]
struct MeasurementArgs {
    /// 畜种 (cattle/goat/sheep 或 sapi/kambing/domba)
    species: String,

    /// 品种名 (如 "Sapi Bali")
    breed: String,

    /// 性别 (male/female 或 jantan/betina)
    sex: String,

    /// 胸围 (cm)
    #[arg(long = "chest-girth", short = 'g')]
    chest_girth_cm: f64,

    /// 体长 (cm)
    #[arg(long = "body-length", short = 'l')]
    body_length_cm: f64,
}

impl MeasurementArgs {
    fn to_request(&self) -> CalculationRequest {
        CalculationRequest::new(
            &self.species,
            &self.breed,
            &self.sex,
            self.chest_girth_cm,
            self.body_length_cm,
        )
    }
}

#[derive(Args, Debug, Clone)]
struct GridArgs {
    /// 变异幅度 (%), 缺省取配置
    #[arg(long)]
    variation: Option<f64>,

    /// 每轴步数, 缺省取配置
    #[arg(long)]
    steps: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 列出畜种
    Species,

    /// 列出某畜种的品种
    Breeds { species: String },

    /// 表单默认值与输入边界
    Hints { species: String, breed: String },

    /// 体重估算
    Estimate(MeasurementArgs),

    /// 同一测量值下对比该畜种全部公式
    CompareFormulas(MeasurementArgs),

    /// 同一测量值下对比该畜种全部品种
    CompareBreeds {
        species: String,
        sex: String,
        #[arg(long = "chest-girth", short = 'g')]
        chest_girth_cm: f64,
        #[arg(long = "body-length", short = 'l')]
        body_length_cm: f64,
        /// 升序 (默认降序)
        #[arg(long)]
        ascending: bool,
    },

    /// 胴体分解
    Carcass {
        species: String,
        breed: String,
        sex: String,
        /// 胸围 (cm), 指定 --live-weight 时可省略
        #[arg(long = "chest-girth", short = 'g', required_unless_present = "live_weight")]
        chest_girth_cm: Option<f64>,
        /// 体长 (cm), 指定 --live-weight 时可省略
        #[arg(long = "body-length", short = 'l', required_unless_present = "live_weight")]
        body_length_cm: Option<f64>,
        /// 直接指定活重 (kg), 不再由测量值估算
        #[arg(long, conflicts_with_all = ["chest_girth_cm", "body_length_cm"])]
        live_weight: Option<f64>,
    },

    /// 变异/敏感性网格
    Grid {
        #[command(flatten)]
        measurement: MeasurementArgs,
        #[command(flatten)]
        grid: GridArgs,
    },

    /// 完整计算报告
    Report {
        #[command(flatten)]
        measurement: MeasurementArgs,
        #[command(flatten)]
        grid: GridArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // === 步骤 1: 配置 ===
    let mut config = ConfigManager::load(cli.config.as_deref()).context("加载配置失败")?;
    if let Some(locale) = &cli.locale {
        config.set_config_value(config_keys::LOCALE, locale);
    }

    // === 步骤 2: 日志 ===
    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        config.get_log_format()
    };
    logging::init_with_format(log_format);
    i18n::set_locale(&config.get_locale());

    tracing::debug!(version = livestock_weight::VERSION, "{}", livestock_weight::APP_NAME);

    // === 步骤 3: 执行子命令 ===
    let api = CalculatorApi::from_config(config).context("初始化计算器失败")?;
    run(&api, cli.command, cli.format)
}

fn run(api: &CalculatorApi, command: Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::Species => {
            ensure_json(format, "species")?;
            print_json(&api.species_list())
        }
        Command::Breeds { species } => {
            ensure_json(format, "breeds")?;
            print_json(&api.breed_list(&species)?)
        }
        Command::Hints { species, breed } => {
            ensure_json(format, "hints")?;
            print_json(&api.hints(&species, &breed)?)
        }
        Command::Estimate(measurement) => {
            ensure_json(format, "estimate")?;
            print_json(&api.estimate(&measurement.to_request())?)
        }
        Command::CompareFormulas(measurement) => {
            let comparison = api.compare_formulas(&measurement.to_request())?;
            match format {
                OutputFormat::Json => print_json(&comparison),
                OutputFormat::Csv => Ok(export::write_formula_comparison(
                    &comparison,
                    std::io::stdout().lock(),
                )?),
            }
        }
        Command::CompareBreeds {
            species,
            sex,
            chest_girth_cm,
            body_length_cm,
            ascending,
        } => {
            let direction = if ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };
            let ranking =
                api.rank_breeds(&species, &sex, chest_girth_cm, body_length_cm, direction)?;
            match format {
                OutputFormat::Json => print_json(&ranking),
                OutputFormat::Csv => Ok(export::write_breed_comparison(
                    &ranking,
                    std::io::stdout().lock(),
                )?),
            }
        }
        Command::Carcass {
            species,
            breed,
            sex,
            chest_girth_cm,
            body_length_cm,
            live_weight,
        } => {
            let breakdown = match (live_weight, chest_girth_cm, body_length_cm) {
                (Some(weight), _, _) => api.decompose_weight(weight, &species, &breed, &sex)?,
                (None, Some(ld), Some(pb)) => {
                    api.decompose(&CalculationRequest::new(&species, &breed, &sex, ld, pb))?
                }
                _ => bail!("carcass 需要 --live-weight, 或同时指定 --chest-girth 与 --body-length"),
            };
            match format {
                OutputFormat::Json => print_json(&breakdown),
                OutputFormat::Csv => Ok(export::write_carcass_breakdown(
                    &breakdown,
                    std::io::stdout().lock(),
                )?),
            }
        }
        Command::Grid { measurement, grid } => {
            let mut request = measurement.to_request();
            request.variation_percent = grid.variation;
            request.grid_steps = grid.steps;
            let variation_grid = api.grid(&request)?;
            match format {
                OutputFormat::Json => print_json(&variation_grid),
                OutputFormat::Csv => Ok(export::write_variation_grid(
                    &variation_grid,
                    std::io::stdout().lock(),
                )?),
            }
        }
        Command::Report { measurement, grid } => {
            ensure_json(format, "report")?;
            let mut request = measurement.to_request();
            request.variation_percent = grid.variation;
            request.grid_steps = grid.steps;
            print_json(&api.calculate(&request)?)
        }
    }
}

fn ensure_json(format: OutputFormat, command: &str) -> Result<()> {
    if format == OutputFormat::Csv {
        bail!("{} 不支持 CSV 输出, 请使用 --format json", command);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("序列化输出失败")?;
    writeln!(stdout)?;
    Ok(())
}
