//! 稳定的 DTO 与 API 响应契约：订单请求与校验结果。

use domain::{
    CapacityUsage, FitFailure, GlandGroup, GlandRequest, InvalidOrderShape, ItemRef,
    LineConfiguration, LinePrice, LineReport, Material, Order, OrderLine, PriceBreakdown,
    ShapeIssue, Side, TerminalRequest, ValidationResult,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 订单请求体。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_information: String,
    #[serde(default)]
    pub save_box: Vec<SaveBoxRequest>,
}

/// 已配置机箱（订单行）。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBoxRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub current_config: CurrentConfigRequest,
}

/// 机箱配置。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConfigRequest {
    #[serde(default)]
    pub glands: Vec<GlandSideRequest>,
    #[serde(default)]
    pub terminals: Vec<TerminalItemRequest>,
}

/// 同一面上的格兰头。
#[derive(Debug, Clone, Deserialize)]
pub struct GlandSideRequest {
    #[serde(default)]
    pub side: String,
    #[serde(default)]
    pub items: Vec<GlandItemRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlandItemRequest {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub material: String,
}

/// 端子；`size` 为导线截面。
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalItemRequest {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub color: String,
}

impl OrderRequest {
    /// 转换为领域订单；收集全部问题后一次返回。
    pub fn into_order(self) -> Result<Order, InvalidOrderShape> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ShapeIssue::new("name", "name required"));
        }
        if !self.email.contains('@') {
            issues.push(ShapeIssue::new("email", "invalid email"));
        }
        if self.save_box.is_empty() {
            issues.push(ShapeIssue::new("saveBox", "at least one enclosure required"));
        }

        let lines: Vec<OrderLine> = self
            .save_box
            .into_iter()
            .enumerate()
            .map(|(index, save_box)| save_box.into_line(&format!("saveBox[{index}]"), &mut issues))
            .collect();

        InvalidOrderShape::from_issues(issues)?;
        Ok(Order {
            customer_name: self.name.trim().to_string(),
            customer_email: self.email.trim().to_string(),
            note: self.user_information,
            lines,
        })
    }
}

impl SaveBoxRequest {
    fn into_line(self, path: &str, issues: &mut Vec<ShapeIssue>) -> OrderLine {
        if self.code.trim().is_empty() {
            issues.push(ShapeIssue::new(format!("{path}.code"), "enclosure code required"));
        }
        let quantity = match u32::try_from(self.quantity) {
            Ok(quantity) if quantity > 0 => quantity,
            _ => {
                issues.push(ShapeIssue::new(
                    format!("{path}.quantity"),
                    "quantity must be at least 1",
                ));
                0
            }
        };

        let config_path = format!("{path}.currentConfig");
        let mut configuration = LineConfiguration::default();
        for (group_index, group) in self.current_config.glands.into_iter().enumerate() {
            let group_path = format!("{config_path}.glands[{group_index}]");
            let side = Side::parse(&group.side);
            if side.is_none() {
                issues.push(ShapeIssue::new(
                    format!("{group_path}.side"),
                    format!("unknown side: {}", group.side),
                ));
            }
            let items: Vec<GlandRequest> = group
                .items
                .into_iter()
                .enumerate()
                .filter_map(|(item_index, item)| {
                    item.into_request(&format!("{group_path}.items[{item_index}]"), issues)
                })
                .collect();
            if let Some(side) = side {
                configuration.glands.push(GlandGroup { side, items });
            }
        }
        for (index, item) in self.current_config.terminals.into_iter().enumerate() {
            let item_path = format!("{config_path}.terminals[{index}]");
            if let Some(request) = item.into_request(&item_path, issues) {
                configuration.terminals.push(request);
            }
        }

        OrderLine {
            enclosure_code: self.code.trim().to_string(),
            quantity,
            configuration,
            comment: self.comment.filter(|comment| !comment.trim().is_empty()),
        }
    }
}

impl GlandItemRequest {
    fn into_request(self, path: &str, issues: &mut Vec<ShapeIssue>) -> Option<GlandRequest> {
        let quantity = item_quantity(self.quantity, path, issues);
        if self.size.trim().is_empty() {
            issues.push(ShapeIssue::new(format!("{path}.size"), "gland size required"));
        }
        let material = match self.material.parse::<Material>() {
            Ok(material) => Some(material),
            Err(err) => {
                issues.push(ShapeIssue::new(format!("{path}.material"), err.to_string()));
                None
            }
        };
        Some(GlandRequest {
            size: self.size.trim().to_string(),
            material: material?,
            quantity: quantity?,
        })
    }
}

impl TerminalItemRequest {
    fn into_request(self, path: &str, issues: &mut Vec<ShapeIssue>) -> Option<TerminalRequest> {
        let quantity = item_quantity(self.quantity, path, issues);
        if self.size.trim().is_empty() {
            issues.push(ShapeIssue::new(format!("{path}.size"), "cross section required"));
        }
        if self.color.trim().is_empty() {
            issues.push(ShapeIssue::new(format!("{path}.color"), "color required"));
        }
        Some(TerminalRequest {
            cross_section: self.size.trim().to_string(),
            color: self.color.trim().to_string(),
            quantity: quantity?,
        })
    }
}

fn item_quantity(value: i64, path: &str, issues: &mut Vec<ShapeIssue>) -> Option<u32> {
    match u32::try_from(value) {
        Ok(quantity) => Some(quantity),
        Err(_) => {
            issues.push(ShapeIssue::new(
                format!("{path}.quantity"),
                "quantity must be between 0 and 4294967295",
            ));
            None
        }
    }
}

/// 校验结果响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub fits: bool,
    pub failures: Vec<FitFailureDto>,
    pub price: PriceDto,
    pub lines: Vec<LineReportDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitFailureDto {
    pub line_index: usize,
    pub scope: &'static str,
    pub reason: &'static str,
    pub message: String,
    pub required_mm: f64,
    pub available_mm: f64,
    pub offending_items: Vec<ItemDto>,
}

/// 不满足约束的组件。
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ItemDto {
    Gland {
        size: String,
        material: &'static str,
        quantity: u32,
    },
    Terminal {
        cross_section: String,
        color: String,
        quantity: u32,
    },
}

/// 金额均为两位小数的字符串。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub enclosures: String,
    pub glands: String,
    pub terminals: String,
    pub total: String,
    pub lines: Vec<LinePriceDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePriceDto {
    pub line_index: usize,
    pub enclosure: String,
    pub glands: String,
    pub terminals: String,
    pub total: String,
}

/// 单行的空间占用明细。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReportDto {
    pub line_index: usize,
    pub enclosure_code: String,
    pub quantity: u32,
    pub fits: bool,
    pub usage: Vec<UsageDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDto {
    pub scope: &'static str,
    pub required_mm: f64,
    pub available_mm: Option<f64>,
    pub fits: bool,
}

fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

impl From<&ValidationResult> for ValidationResponse {
    fn from(result: &ValidationResult) -> Self {
        Self {
            fits: result.fits,
            failures: result.failures.iter().map(FitFailureDto::from).collect(),
            price: PriceDto::from(&result.price),
            lines: result.lines.iter().map(LineReportDto::from).collect(),
        }
    }
}

impl From<&FitFailure> for FitFailureDto {
    fn from(failure: &FitFailure) -> Self {
        Self {
            line_index: failure.line_index,
            scope: failure.scope.as_str(),
            reason: failure.reason.as_str(),
            message: failure.reason.to_string(),
            required_mm: failure.required_mm,
            available_mm: failure.available_mm,
            offending_items: failure.offending_items.iter().map(ItemDto::from).collect(),
        }
    }
}

impl From<&ItemRef> for ItemDto {
    fn from(item: &ItemRef) -> Self {
        match item {
            ItemRef::Gland {
                size,
                material,
                quantity,
            } => ItemDto::Gland {
                size: size.clone(),
                material: material.as_str(),
                quantity: *quantity,
            },
            ItemRef::Terminal {
                cross_section,
                color,
                quantity,
            } => ItemDto::Terminal {
                cross_section: cross_section.clone(),
                color: color.clone(),
                quantity: *quantity,
            },
        }
    }
}

impl From<&PriceBreakdown> for PriceDto {
    fn from(price: &PriceBreakdown) -> Self {
        Self {
            enclosures: money(price.enclosures),
            glands: money(price.glands),
            terminals: money(price.terminals),
            total: money(price.total),
            lines: price.lines.iter().map(LinePriceDto::from).collect(),
        }
    }
}

impl From<&LinePrice> for LinePriceDto {
    fn from(line: &LinePrice) -> Self {
        Self {
            line_index: line.line_index,
            enclosure: money(line.enclosure),
            glands: money(line.glands),
            terminals: money(line.terminals),
            total: money(line.total),
        }
    }
}

impl From<&LineReport> for LineReportDto {
    fn from(report: &LineReport) -> Self {
        Self {
            line_index: report.line_index,
            enclosure_code: report.enclosure_code.clone(),
            quantity: report.quantity,
            fits: report.fits(),
            usage: report.usage.iter().map(UsageDto::from).collect(),
        }
    }
}

impl From<&CapacityUsage> for UsageDto {
    fn from(usage: &CapacityUsage) -> Self {
        Self {
            scope: usage.scope.as_str(),
            required_mm: usage.required_mm,
            available_mm: usage.available_mm,
            fits: usage.fits,
        }
    }
}
