pub mod vi;

pub use vi as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let first_pass = template.replacen("{}", &first.to_string(), 1);
    first_pass.replacen("{}", &second.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::{fill_one, fill_two};

    #[test]
    fn fill_replaces_placeholders_in_order() {
        assert_eq!(fill_one("Trang {}", 3), "Trang 3");
        assert_eq!(fill_two("{} / {}", 1, 9), "1 / 9");
        assert_eq!(fill_one("không có chỗ trống", 1), "không có chỗ trống");
    }
}
