/// Fixed user-facing strings of the admin forms.
///
/// The admin UI is Korean-only. Language codes are the only multilingual
/// part of the forms, so there is a single string table.
/// Placeholders in braces (e.g., `{index}`) are filled with `str::replace`.
#[derive(Debug, Clone)]
pub struct FormStrings {
    // ==================== Field Set Rows ====================
    /// Label of the per-row remove button
    pub remove_button: &'static str,

    // ==================== Research Form ====================
    pub title_required: &'static str,
    pub authors_required: &'static str,
    pub year_required: &'static str,
    pub year_format: &'static str,
    pub summary_kor_required: &'static str,
    pub summary_eng_required: &'static str,

    // ==================== Ingredient / Cooking Method / Dish Names ====================
    pub name_kor_required: &'static str,
    pub name_eng_required: &'static str,
    pub description_kor_required: &'static str,
    pub description_eng_required: &'static str,

    // ==================== Production Time ====================
    pub min_time_required: &'static str,
    pub max_time_required: &'static str,
    pub min_time_exceeds_max: &'static str,
    pub nutrition_negative: &'static str,

    // ==================== Dish Form ====================
    pub ingredient_required: &'static str,
    /// Placeholders: {index}
    pub ingredient_row_unselected: &'static str,
    /// Placeholders: {index}
    pub ingredient_row_amount: &'static str,
    pub cooking_method_required: &'static str,
    pub instructions_kor_required: &'static str,
    pub instructions_eng_required: &'static str,

    // ==================== Multilingual Fields ====================
    /// Placeholders: {field}, {code}
    pub multilingual_text_required: &'static str,

    // ==================== Storage / Production Form ====================
    pub start_label_production: &'static str,
    pub start_label_storage: &'static str,
    pub end_label_production: &'static str,
    pub end_label_storage: &'static str,
    pub not_producible: &'static str,
    /// Placeholders: {min}, {max}, {min_date}, {max_date}
    pub production_period: &'static str,
}

pub const KOREAN_STRINGS: FormStrings = FormStrings {
    remove_button: "삭제",

    title_required: "제목을 입력해주세요.",
    authors_required: "저자를 입력해주세요.",
    year_required: "출판년도를 입력해주세요.",
    year_format: "출판년도는 4자리 숫자로 입력해주세요.",
    summary_kor_required: "한글 요약을 입력해주세요.",
    summary_eng_required: "영문 요약을 입력해주세요.",

    name_kor_required: "한글 이름을 입력해주세요.",
    name_eng_required: "영문 이름을 입력해주세요.",
    description_kor_required: "한글 설명을 입력해주세요.",
    description_eng_required: "영문 설명을 입력해주세요.",

    min_time_required: "최소 생산 시간을 입력해주세요.",
    max_time_required: "최대 생산 시간을 입력해주세요.",
    min_time_exceeds_max: "최소 생산 시간은 최대 생산 시간보다 작아야 합니다.",
    nutrition_negative: "영양 정보는 음수가 될 수 없습니다.",

    ingredient_required: "최소 하나의 재료를 추가해주세요.",
    ingredient_row_unselected: "{index}번째 재료를 선택해주세요.",
    ingredient_row_amount: "{index}번째 재료의 양을 올바르게 입력해주세요.",
    cooking_method_required: "최소 하나의 조리 방법을 선택해주세요.",
    instructions_kor_required: "한글 조리 설명을 입력해주세요.",
    instructions_eng_required: "영문 조리 설명을 입력해주세요.",

    multilingual_text_required: "{field} ({code}) 값을 입력해주세요.",

    start_label_production: "생산 시작일:",
    start_label_storage: "보관 시작일:",
    end_label_production: "생산 종료일:",
    end_label_storage: "보관 종료일:",
    not_producible: "이 재료는 생산할 수 없습니다",
    production_period: "생산 기간: {min}~{max}일 ({min_date} ~ {max_date})",
};

impl FormStrings {
    /// Get the string table used by the forms.
    pub fn get() -> &'static FormStrings {
        &KOREAN_STRINGS
    }
}
