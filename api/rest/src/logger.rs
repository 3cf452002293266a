/// Access log line: client, request line, status, bytes, referer, duration.
pub fn logger_format() -> &'static str {
    r#"🌐 %a "%r" %s %b "%{Referer}i" %Dms"#
}
