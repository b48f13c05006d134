// ==========================================
// 家畜体重估算系统 - 计算器 API
// ==========================================
// 职责: 输入契约解析 + 引擎编排 + 报告汇总
// 输入: species / breed / sex 为字符串 (英文或印尼语, 不区分大小写)
//       chest_girth_cm / body_length_cm 为厘米
// 输出: CalculationReport (一次调用得到全部结果)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::{
    BreedComparisonRow, CarcassBreakdown, CarcassFlow, CarcassPercentDistribution,
    EstimationNote, EstimationResult, FormulaComparison, MeasurementAssessment, MeasurementAxis,
    MeasurementHints, RankedBreed, ResponseCurve, Sex, SortDirection, Species, VariationGrid,
    WeightDistribution,
};
use crate::engine::{
    build_carcass_flow, BreedComparator, CarcassEngine, DistributionEngine, FormulaComparator,
    MeasurementHintProvider, ResponseCurveGenerator, VariationGridGenerator, WeightEstimator,
};
use crate::i18n;
use crate::reference::{self, ReferenceData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ==========================================
// CalculationRequest - 输入契约
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub species: String,
    pub breed: String,
    pub sex: String,
    pub chest_girth_cm: f64,
    pub body_length_cm: f64,
    #[serde(default)]
    pub variation_percent: Option<f64>, // 缺省取配置 default_variation_percent
    #[serde(default)]
    pub grid_steps: Option<usize>, // 缺省取配置 default_grid_steps
}

impl CalculationRequest {
    pub fn new(
        species: &str,
        breed: &str,
        sex: &str,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> Self {
        Self {
            species: species.to_string(),
            breed: breed.to_string(),
            sex: sex.to_string(),
            chest_girth_cm,
            body_length_cm,
            variation_percent: None,
            grid_steps: None,
        }
    }
}

// ==========================================
// CalculationReport - 完整计算报告
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub species_label: String,
    pub sex_label: String,
    pub estimation: EstimationResult,
    pub carcass: Option<CarcassBreakdown>, // 体重 ≤ 0 时为 None
    pub carcass_flow: Option<CarcassFlow>,
    pub notes: Vec<String>, // 已本地化的附注
    pub formula_comparison: FormulaComparison,
    pub breed_ranking: Vec<RankedBreed>,
    pub variation_grid: VariationGrid,
    pub chest_girth_curve: ResponseCurve,
    pub body_length_curve: ResponseCurve,
    pub weight_distribution: WeightDistribution,
    pub carcass_percent_distribution: CarcassPercentDistribution,
    pub assessment: MeasurementAssessment,
    pub generated_at: DateTime<Utc>,
    pub config_snapshot: String,
}

// ==========================================
// 参考数据导出
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSummary {
    pub species: Species,
    pub label: String,
    pub local_name: String,
    pub breed_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationSource {
    Formula,
    SlaughterProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationEntry {
    pub source: CitationSource,
    pub subject: String, // 公式名或品种名
    pub citation: String,
}

// ==========================================
// CalculatorApi
// ==========================================
pub struct CalculatorApi {
    reference: ReferenceData,
    config: ConfigManager,
}

impl CalculatorApi {
    /// 默认配置 + 内置参考数据
    pub fn new() -> ApiResult<Self> {
        Self::from_config(ConfigManager::with_defaults())
    }

    /// 按配置构建
    ///
    /// reference_data_path 已设置时从该文件加载参考数据 (与内置表同样校验),
    /// 否则使用进程级内置数据
    pub fn from_config(config: ConfigManager) -> ApiResult<Self> {
        let reference = match config.get_reference_data_path() {
            Some(path) => ReferenceData::from_path(&path)?,
            None => reference::global()?.clone(),
        };
        Ok(Self { reference, config })
    }

    /// 使用调用方提供的参考数据, 校验通过后构建
    pub fn with_reference(reference: ReferenceData, config: ConfigManager) -> ApiResult<Self> {
        reference.validate()?;
        Ok(Self { reference, config })
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &ConfigManager {
        &self.config
    }

    pub fn locale(&self) -> String {
        self.config.get_locale()
    }

    // ==========================================
    // 完整报告
    // ==========================================

    /// 一次计算全部结果
    #[instrument(level = "debug", skip(self))]
    pub fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationReport> {
        let (species, sex) = parse_selectors(request)?;
        let locale = self.locale();
        let ld = request.chest_girth_cm;
        let pb = request.body_length_cm;

        // === 步骤 1: 体重估算 ===
        let estimation =
            WeightEstimator::new(&self.reference).estimate(species, &request.breed, sex, ld, pb)?;
        let breed = estimation.breed.clone();
        let mut notes: Vec<String> = estimation
            .notes
            .iter()
            .map(|note| localize_note(note, &locale))
            .collect();

        // === 步骤 2: 胴体分解 (体重 ≤ 0 时跳过) ===
        let carcass = if estimation.corrected_weight > 0.0 {
            Some(CarcassEngine::new(&self.reference).decompose_estimation(&estimation)?)
        } else {
            notes.push(i18n::t_in("note.carcass_skipped", &locale));
            None
        };
        let carcass_flow = carcass
            .as_ref()
            .map(|breakdown| build_carcass_flow(breakdown, &locale));

        // === 步骤 3: 公式对比 / 品种排名 ===
        let formula_comparison =
            FormulaComparator::new(&self.reference).compare(species, &breed, sex, ld, pb)?;
        let breed_ranking = BreedComparator::new(&self.reference).compare_ranked(
            species,
            sex,
            ld,
            pb,
            SortDirection::Descending,
        )?;

        // === 步骤 4: 变异网格 ===
        let variation_grid = self.grid_for(species, &breed, sex, request)?;

        // === 步骤 5: 响应曲线 ===
        let chest_girth_curve =
            self.curve_for(species, &breed, sex, MeasurementAxis::ChestGirth, request)?;
        let body_length_curve =
            self.curve_for(species, &breed, sex, MeasurementAxis::BodyLength, request)?;

        // === 步骤 6: 分布 ===
        let distributions = DistributionEngine::new(&self.reference);
        let weight_distribution =
            distributions.weight_distribution(species, &breed, sex, estimation.corrected_weight)?;
        let carcass_percent_distribution =
            distributions.carcass_percent_distribution(species, &breed, sex)?;

        // === 步骤 7: 测量值评估 ===
        let assessment = self.hint_provider().assess(species, &breed, ld, pb)?;

        info!(
            species = %species,
            breed = %breed,
            sex = %sex,
            corrected_weight = estimation.corrected_weight,
            notes = notes.len(),
            "计算报告生成完成"
        );

        Ok(CalculationReport {
            species_label: i18n::species_label(species, &locale),
            sex_label: i18n::sex_label(sex, &locale),
            estimation,
            carcass,
            carcass_flow,
            notes,
            formula_comparison,
            breed_ranking,
            variation_grid,
            chest_girth_curve,
            body_length_curve,
            weight_distribution,
            carcass_percent_distribution,
            assessment,
            generated_at: Utc::now(),
            config_snapshot: self.config.snapshot()?,
        })
    }

    // ==========================================
    // 单项计算
    // ==========================================

    pub fn estimate(&self, request: &CalculationRequest) -> ApiResult<EstimationResult> {
        let (species, sex) = parse_selectors(request)?;
        Ok(WeightEstimator::new(&self.reference).estimate(
            species,
            &request.breed,
            sex,
            request.chest_girth_cm,
            request.body_length_cm,
        )?)
    }

    pub fn compare_formulas(&self, request: &CalculationRequest) -> ApiResult<FormulaComparison> {
        let (species, sex) = parse_selectors(request)?;
        Ok(FormulaComparator::new(&self.reference).compare(
            species,
            &request.breed,
            sex,
            request.chest_girth_cm,
            request.body_length_cm,
        )?)
    }

    /// 品种对比 (不需要品种选择器)
    pub fn compare_breeds(
        &self,
        species: &str,
        sex: &str,
        chest_girth_cm: f64,
        body_length_cm: f64,
    ) -> ApiResult<Vec<BreedComparisonRow>> {
        let species: Species = species.parse()?;
        let sex: Sex = sex.parse()?;
        Ok(BreedComparator::new(&self.reference).compare(
            species,
            sex,
            chest_girth_cm,
            body_length_cm,
        )?)
    }

    pub fn rank_breeds(
        &self,
        species: &str,
        sex: &str,
        chest_girth_cm: f64,
        body_length_cm: f64,
        direction: SortDirection,
    ) -> ApiResult<Vec<RankedBreed>> {
        let species: Species = species.parse()?;
        let sex: Sex = sex.parse()?;
        Ok(BreedComparator::new(&self.reference).compare_ranked(
            species,
            sex,
            chest_girth_cm,
            body_length_cm,
            direction,
        )?)
    }

    /// 估算后做胴体分解; 体重 ≤ 0 时返回 NonPositiveLiveWeight
    pub fn decompose(&self, request: &CalculationRequest) -> ApiResult<CarcassBreakdown> {
        let estimation = self.estimate(request)?;
        Ok(CarcassEngine::new(&self.reference).decompose_estimation(&estimation)?)
    }

    /// 按已知活重分解
    pub fn decompose_weight(
        &self,
        live_weight_kg: f64,
        species: &str,
        breed: &str,
        sex: &str,
    ) -> ApiResult<CarcassBreakdown> {
        let species: Species = species.parse()?;
        let sex: Sex = sex.parse()?;
        Ok(CarcassEngine::new(&self.reference).decompose(live_weight_kg, species, breed, sex)?)
    }

    pub fn carcass_flow(&self, breakdown: &CarcassBreakdown) -> CarcassFlow {
        build_carcass_flow(breakdown, &self.locale())
    }

    pub fn grid(&self, request: &CalculationRequest) -> ApiResult<VariationGrid> {
        let (species, sex) = parse_selectors(request)?;
        self.grid_for(species, &request.breed, sex, request)
    }

    /// 沿 axis 扫描, 另一轴固定为请求中的测量值
    pub fn response_curve(
        &self,
        request: &CalculationRequest,
        axis: MeasurementAxis,
    ) -> ApiResult<ResponseCurve> {
        let (species, sex) = parse_selectors(request)?;
        self.curve_for(species, &request.breed, sex, axis, request)
    }

    // ==========================================
    // 参考数据 (只读)
    // ==========================================

    pub fn species_list(&self) -> Vec<SpeciesSummary> {
        let locale = self.locale();
        self.reference
            .species
            .iter()
            .map(|tables| SpeciesSummary {
                species: tables.species,
                label: i18n::species_label(tables.species, &locale),
                local_name: tables.species.local_name().to_string(),
                breed_count: tables.breeds.len(),
            })
            .collect()
    }

    pub fn breed_list(&self, species: &str) -> ApiResult<Vec<String>> {
        let species: Species = species.parse()?;
        Ok(self
            .reference
            .breed_names(species)?
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// 表单默认值与输入边界
    pub fn hints(&self, species: &str, breed: &str) -> ApiResult<MeasurementHints> {
        let species: Species = species.parse()?;
        Ok(self.hint_provider().hints(species, breed)?)
    }

    /// 公式与屠宰档案文献引用 (公式注册顺序, 再按品种顺序)
    pub fn citations(&self, species: &str) -> ApiResult<Vec<CitationEntry>> {
        let species: Species = species.parse()?;
        let tables = self.reference.tables(species)?;

        let formulas = tables.formulas.iter().map(|formula| CitationEntry {
            source: CitationSource::Formula,
            subject: formula.name.clone(),
            citation: formula.citation.clone(),
        });
        let slaughter = tables.slaughter.iter().map(|profile| CitationEntry {
            source: CitationSource::SlaughterProfile,
            subject: profile.breed.clone(),
            citation: profile.citation.clone(),
        });
        Ok(formulas.chain(slaughter).collect())
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn hint_provider(&self) -> MeasurementHintProvider<'_> {
        MeasurementHintProvider::new(&self.reference, self.config.get_range_tolerance_percent())
    }

    fn curve_for(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        axis: MeasurementAxis,
        request: &CalculationRequest,
    ) -> ApiResult<ResponseCurve> {
        let fixed_value = match axis {
            MeasurementAxis::ChestGirth => request.body_length_cm,
            MeasurementAxis::BodyLength => request.chest_girth_cm,
        };
        Ok(
            ResponseCurveGenerator::new(&self.reference, self.config.get_response_curve_points())
                .generate(species, breed, sex, axis, fixed_value)?,
        )
    }

    fn grid_for(
        &self,
        species: Species,
        breed: &str,
        sex: Sex,
        request: &CalculationRequest,
    ) -> ApiResult<VariationGrid> {
        let variation_percent = request
            .variation_percent
            .unwrap_or_else(|| self.config.get_default_variation_percent());
        let steps = request
            .grid_steps
            .unwrap_or_else(|| self.config.get_default_grid_steps());
        debug!(variation_percent, steps, "生成变异网格");

        Ok(VariationGridGenerator::new(&self.reference).generate(
            species,
            breed,
            sex,
            request.chest_girth_cm,
            request.body_length_cm,
            variation_percent,
            steps,
        )?)
    }
}

/// 解析畜种与性别 (品种在引擎内解析)
fn parse_selectors(request: &CalculationRequest) -> ApiResult<(Species, Sex)> {
    if request.breed.trim().is_empty() {
        return Err(ApiError::InvalidInput("breed 不能为空".to_string()));
    }
    let species: Species = request.species.parse()?;
    let sex: Sex = request.sex.parse()?;
    Ok((species, sex))
}

/// 附注本地化
fn localize_note(note: &EstimationNote, locale: &str) -> String {
    match note {
        EstimationNote::OutOfTypicalRange { axis, .. } => {
            let axis_label = i18n::axis_label(*axis, locale);
            i18n::t_with_args("note.out_of_range", locale, &[("axis", axis_label.as_str())])
        }
        EstimationNote::NonPositiveResult { raw_weight } => {
            let weight = format!("{:.2}", raw_weight);
            i18n::t_with_args("note.non_positive", locale, &[("weight", weight.as_str())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_keys;
    use crate::engine::variation::MAX_GRID_STEPS;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    fn bali_request() -> CalculationRequest {
        CalculationRequest::new("sapi", "Sapi Bali", "Jantan", 180.0, 150.0)
    }

    // ==========================================
    // 测试 1: 完整报告
    // ==========================================
    #[test]
    fn test_calculate_full_report() {
        let api = CalculatorApi::new().unwrap();
        let report = api.calculate(&bali_request()).unwrap();

        assert_relative_eq!(report.estimation.corrected_weight, 448.844, epsilon = 1e-9);
        assert_eq!(report.species_label, "Cattle");
        assert!(report.notes.is_empty());

        let carcass = report.carcass.as_ref().unwrap();
        assert_relative_eq!(carcass.carcass_weight, 235.6431, epsilon = 1e-9);
        assert!(report.carcass_flow.is_some());

        assert_eq!(report.variation_grid.steps(), 3);
        assert_eq!(report.chest_girth_curve.points.len(), 50);
        assert_eq!(report.body_length_curve.points.len(), 50);
        assert!(report.assessment.is_typical());
        assert!(report.formula_comparison.rows.iter().any(|r| r.is_assigned));
        assert_eq!(report.breed_ranking[0].rank, 1);
        assert!(report.config_snapshot.contains("\"locale\":\"en\""));
    }

    // ==========================================
    // 测试 2: 非正体重跳过胴体分解
    // ==========================================
    #[test]
    fn test_non_positive_weight_skips_carcass() {
        let mut config = ConfigManager::with_defaults();
        config.set_config_value(config_keys::LOCALE, "id");
        let api = CalculatorApi::from_config(config).unwrap();

        let request = CalculationRequest::new("domba", "Domba Merino", "betina", 40.0, 40.0);
        let report = api.calculate(&request).unwrap();

        assert!(report.estimation.corrected_weight <= 0.0);
        assert!(report.carcass.is_none());
        assert!(report.carcass_flow.is_none());
        assert!(report
            .notes
            .iter()
            .any(|n| n.contains("Analisis karkas dilewati")));

        let err = api.decompose(&request).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Calc(CalcError::NonPositiveLiveWeight(_))
        ));
    }

    // ==========================================
    // 测试 3: 未知选择器
    // ==========================================
    #[test]
    fn test_unknown_selectors() {
        let api = CalculatorApi::new().unwrap();

        let err = api
            .estimate(&CalculationRequest::new("horse", "X", "male", 100.0, 100.0))
            .unwrap_err();
        assert!(err.is_unknown_selector());

        let err = api
            .estimate(&CalculationRequest::new("cattle", "Unknown", "male", 100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::Calc(CalcError::UnknownBreed { .. })));

        let err = api
            .estimate(&CalculationRequest::new("cattle", "Sapi Bali", "x", 100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::Calc(CalcError::UnknownSex(_))));

        let err = api
            .estimate(&CalculationRequest::new("cattle", " ", "male", 100.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    // ==========================================
    // 测试 4: 请求参数覆盖配置默认值
    // ==========================================
    #[test]
    fn test_request_overrides_grid_defaults() {
        let api = CalculatorApi::new().unwrap();
        let mut request = bali_request();
        request.variation_percent = Some(20.0);
        request.grid_steps = Some(5);

        let grid = api.grid(&request).unwrap();
        assert_eq!(grid.steps(), 5);
        assert_eq!(grid.variation_percent, 20.0);
        assert_eq!(grid.chest_girth_values[2], 180.0);
    }

    // ==========================================
    // 测试 4b: 超大网格/曲线参数被拒绝, 不分配
    // ==========================================
    #[test]
    fn test_oversized_grid_steps_rejected() {
        let api = CalculatorApi::new().unwrap();
        for steps in [MAX_GRID_STEPS + 1, usize::MAX] {
            let mut request = bali_request();
            request.grid_steps = Some(steps);

            let err = api.grid(&request).unwrap_err();
            assert!(matches!(err, ApiError::Calc(CalcError::InvalidGridSpec(_))));
            let err = api.calculate(&request).unwrap_err();
            assert!(matches!(err, ApiError::Calc(CalcError::InvalidGridSpec(_))));
        }
    }

    // ==========================================
    // 测试 5: 参考数据导出
    // ==========================================
    #[test]
    fn test_reference_exports() {
        let api = CalculatorApi::new().unwrap();

        let species = api.species_list();
        assert_eq!(species.len(), 3);
        let total: usize = species.iter().map(|s| s.breed_count).sum();
        assert_eq!(total, 20);

        let breeds = api.breed_list("domba").unwrap();
        assert!(breeds.contains(&"Domba Texel".to_string()));

        let hints = api.hints("sheep", "Domba Texel").unwrap();
        assert_eq!(hints.default_chest_girth, 112.5);

        let citations = api.citations("cattle").unwrap();
        let formulas = citations
            .iter()
            .filter(|c| c.source == CitationSource::Formula)
            .count();
        let profiles = citations
            .iter()
            .filter(|c| c.source == CitationSource::SlaughterProfile)
            .count();
        assert_eq!(formulas, api.reference().formulas(Species::Cattle).unwrap().len());
        assert_eq!(profiles, api.reference().breeds(Species::Cattle).unwrap().len());
    }

    // ==========================================
    // 测试 5b: 响应曲线固定另一轴
    // ==========================================
    #[test]
    fn test_response_curve_fixes_other_axis() {
        let api = CalculatorApi::new().unwrap();
        let request = bali_request();

        let chest = api.response_curve(&request, MeasurementAxis::ChestGirth).unwrap();
        assert_eq!(chest.axis, MeasurementAxis::ChestGirth);
        assert_eq!(chest.fixed_value, request.body_length_cm);

        let length = api.response_curve(&request, MeasurementAxis::BodyLength).unwrap();
        assert_eq!(length.fixed_value, request.chest_girth_cm);

        let report = api.calculate(&request).unwrap();
        assert_eq!(report.chest_girth_curve, chest);
        assert_eq!(report.body_length_curve, length);
    }

    // ==========================================
    // 测试 5c: 外部参考数据须通过校验
    // ==========================================
    #[test]
    fn test_with_reference_validates_tables() {
        let mut data = ReferenceData::builtin();
        assert!(CalculatorApi::with_reference(data.clone(), ConfigManager::with_defaults()).is_ok());

        // 删除一个品种的屠宰档案
        data.species[0].slaughter.remove(0);
        let err = CalculatorApi::with_reference(data, ConfigManager::with_defaults())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ApiError::Calc(CalcError::InconsistentReferenceData(_))
        ));
    }

    // ==========================================
    // 测试 6: 附注本地化
    // ==========================================
    #[test]
    fn test_out_of_range_note_is_localized() {
        let api = CalculatorApi::new().unwrap();
        let request = CalculationRequest::new("cattle", "Sapi Bali", "male", 250.0, 150.0);
        let report = api.calculate(&request).unwrap();

        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].starts_with("Chest Girth"));
        assert!(!report.assessment.is_typical());
    }
}
