use validator::ValidationErrors;

/// 按给定字段顺序取第一条校验错误的提示语
///
/// `ValidationErrors` 内部是无序的，表单需要稳定地先报哪个字段。
pub fn first_error_message(errors: &ValidationErrors, fields: &[&str]) -> Option<String> {
    let field_errors = errors.field_errors();
    fields.iter().find_map(|field| {
        let errs = field_errors.get(*field)?;
        let err = errs.first()?;
        Some(err.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| err.code.to_string()))
    })
}
