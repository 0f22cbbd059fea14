#![allow(dead_code)]

pub mod common {
    pub const BRAND_NAME: &str = "IQ Việt";
    pub const LOADING: &str = "Đang tải...";
    pub const SAVE: &str = "Lưu";
    pub const SAVING: &str = "Đang lưu...";
    pub const CANCEL: &str = "Hủy";
}

pub mod header {
    pub const NAV_HOME: &str = "Trang chủ";
    pub const NAV_TESTS: &str = "Bài test";
    pub const NAV_BLOG: &str = "Blog";
    pub const NAV_LEADERBOARD: &str = "Bảng xếp hạng";
    pub const NAV_ADMIN: &str = "Quản trị";
    pub const NAV_MAIN_ARIA: &str = "Điều hướng chính";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Chuyển sang giao diện sáng";
    pub const SWITCH_TO_DARK: &str = "Chuyển sang giao diện tối";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Phân trang";
    pub const ARIA_PREV: &str = "Trang trước";
    pub const ARIA_NEXT: &str = "Trang sau";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Đến trang {}";
    pub const SUMMARY_TEMPLATE: &str = "Trang {} / {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Đã xảy ra lỗi";
    pub const CLOSE_ARIA: &str = "Đóng thông báo lỗi";
}

pub mod leaderboard {
    pub const TITLE: &str = "Bảng xếp hạng IQ";
    pub const LOCAL_TITLE_TEMPLATE: &str = "Xếp hạng tại {}";
    pub const EMPTY: &str = "Chưa có kết quả nào phù hợp.";
    pub const FETCH_FAILED: &str = "Không thể tải bảng xếp hạng. Vui lòng thử lại.";
    pub const COL_RANK: &str = "Hạng";
    pub const COL_NAME: &str = "Tên";
    pub const COL_SCORE: &str = "Điểm";
    pub const COL_LOCATION: &str = "Khu vực";
    pub const COL_DATE: &str = "Ngày";
    pub const COL_DURATION: &str = "Thời gian";
    pub const FILTER_ALL: &str = "Tất cả";
    pub const FILTER_GENDER: &str = "Giới tính";
    pub const FILTER_COUNTRY: &str = "Quốc gia";
    pub const FILTER_AGE: &str = "Độ tuổi";
    pub const GENDER_MALE: &str = "Nam";
    pub const GENDER_FEMALE: &str = "Nữ";
    pub const GENDER_OTHER: &str = "Khác";
    pub const STATS_TEMPLATE: &str = "{} người tham gia, điểm cao nhất {}";
    pub const BACK_TO_GLOBAL: &str = "Xem bảng xếp hạng toàn cầu";
    pub const CLEAR_FILTERS: &str = "Xóa bộ lọc";
}

pub mod badge {
    pub const GENIUS: &str = "Thiên tài";
    pub const SUPERIOR: &str = "Xuất chúng";
    pub const GIFTED: &str = "Năng khiếu";
    pub const ABOVE_AVERAGE: &str = "Trên trung bình";
    pub const AVERAGE: &str = "Trung bình";
    pub const DEVELOPING: &str = "Đang phát triển";
}

pub mod tags {
    pub const PLACEHOLDER: &str = "Nhập thẻ, phân cách bằng dấu phẩy";
    pub const EMPTY: &str = "Thẻ không được để trống";
    pub const TOO_LONG_TEMPLATE: &str = "Thẻ dài quá {} ký tự";
    pub const DUPLICATE_TEMPLATE: &str = "Thẻ \"{}\" đã tồn tại";
    pub const LIMIT_TEMPLATE: &str = "Tối đa {} thẻ cho mỗi bài viết";
    pub const ADDED_TEMPLATE: &str = "Đã thêm {} thẻ";
    pub const REMOVE_ARIA_TEMPLATE: &str = "Xóa thẻ {}";
}

pub mod slug {
    pub const EMPTY: &str = "Đường dẫn không được để trống";
    pub const INVALID: &str =
        "Đường dẫn chỉ gồm chữ thường, số và dấu gạch ngang, không bắt đầu hoặc kết thúc bằng gạch ngang";
    pub const TOO_LONG_TEMPLATE: &str = "Đường dẫn dài quá {} ký tự";
    pub const TAKEN: &str = "Đường dẫn này đã được sử dụng";
}

pub mod validation {
    pub const TITLE_REQUIRED: &str = "Vui lòng nhập tiêu đề";
    pub const CONTENT_REQUIRED: &str = "Vui lòng nhập nội dung bài viết";
    pub const TOO_LONG_TEMPLATE: &str = "Không được vượt quá {} ký tự";
    pub const CATEGORY_REQUIRED: &str = "Bài viết xuất bản cần ít nhất một danh mục";
    pub const INVALID_DATETIME: &str = "Thời gian không hợp lệ (định dạng YYYY-MM-DDTHH:MM)";
    pub const INVALID_IMAGE_URL: &str = "Ảnh đại diện phải là đường dẫn http(s) hợp lệ";
}

pub mod seo {
    pub const NO_KEYWORD: &str = "Chưa đặt từ khóa chính";
    pub const KEYWORD_IN_TITLE: &str = "Từ khóa chính xuất hiện trong tiêu đề";
    pub const KEYWORD_NOT_IN_TITLE: &str = "Nên đưa từ khóa chính vào tiêu đề";
    pub const KEYWORD_IN_DESCRIPTION: &str = "Từ khóa chính có trong mô tả meta";
    pub const KEYWORD_NOT_IN_DESCRIPTION: &str = "Nên đưa từ khóa chính vào mô tả meta";
    pub const KEYWORD_IN_SLUG: &str = "Đường dẫn chứa từ khóa chính";
    pub const KEYWORD_NOT_IN_SLUG: &str = "Nên đưa từ khóa chính vào đường dẫn";
    pub const KEYWORD_IN_INTRO: &str = "Từ khóa chính xuất hiện ở đoạn mở đầu";
    pub const KEYWORD_NOT_IN_INTRO: &str = "Nên nhắc từ khóa chính trong đoạn mở đầu";
    pub const DENSITY_OK_TEMPLATE: &str = "Mật độ từ khóa {}% là hợp lý";
    pub const DENSITY_LOW_TEMPLATE: &str = "Mật độ từ khóa {}% quá thấp";
    pub const DENSITY_HIGH_TEMPLATE: &str = "Mật độ từ khóa {}% quá cao";
    pub const TITLE_LENGTH_OK: &str = "Độ dài tiêu đề phù hợp";
    pub const TITLE_LENGTH_BAD_TEMPLATE: &str = "Tiêu đề nên dài 30–60 ký tự (hiện tại {})";
    pub const DESCRIPTION_LENGTH_OK: &str = "Độ dài mô tả meta phù hợp";
    pub const DESCRIPTION_LENGTH_BAD_TEMPLATE: &str =
        "Mô tả meta nên dài 120–160 ký tự (hiện tại {})";
    pub const WORD_COUNT_OK_TEMPLATE: &str = "Nội dung có {} từ";
    pub const WORD_COUNT_LOW_TEMPLATE: &str = "Nội dung quá ngắn ({} từ, nên từ 300 từ)";
    pub const HEADINGS_OK: &str = "Nội dung có tiêu đề phụ";
    pub const HEADINGS_MISSING: &str = "Nên chia nội dung bằng tiêu đề phụ (H2, H3)";
    pub const IMAGES_ALT_OK: &str = "Tất cả hình ảnh đều có văn bản thay thế";
    pub const IMAGES_ALT_MISSING_TEMPLATE: &str = "{} hình ảnh thiếu thuộc tính alt";
    pub const SCORE_TEMPLATE: &str = "Điểm SEO: {}/100";
}

pub mod editor {
    pub const TITLE_LABEL: &str = "Tiêu đề";
    pub const SLUG_LABEL: &str = "Đường dẫn";
    pub const CONTENT_LABEL: &str = "Nội dung";
    pub const EXCERPT_LABEL: &str = "Tóm tắt";
    pub const STATUS_LABEL: &str = "Trạng thái";
    pub const CATEGORY_LABEL: &str = "Danh mục";
    pub const AUTHOR_LABEL: &str = "Tác giả";
    pub const TAGS_LABEL: &str = "Thẻ";
    pub const IMAGE_LABEL: &str = "Ảnh đại diện";
    pub const SCHEDULE_LABEL: &str = "Lịch xuất bản";
    pub const META_TITLE_LABEL: &str = "Tiêu đề SEO";
    pub const META_DESCRIPTION_LABEL: &str = "Mô tả SEO";
    pub const FOCUS_KEYWORD_LABEL: &str = "Từ khóa chính";
    pub const STATUS_DRAFT: &str = "Bản nháp";
    pub const STATUS_PUBLISHED: &str = "Đã xuất bản";
    pub const STATUS_ARCHIVED: &str = "Lưu trữ";
    pub const SAVED: &str = "Đã lưu bài viết";
    pub const AUTOSAVED: &str = "Đã tự động lưu bản nháp";
    pub const SAVE_IN_PROGRESS: &str = "Đang lưu, vui lòng đợi";
    pub const NO_AUTHOR: &str = "Chọn tác giả";
    pub const NEW_TITLE: &str = "Viết bài mới";
    pub const EDIT_TITLE: &str = "Chỉnh sửa bài viết";
    pub const LOAD_FAILED: &str = "Không thể tải bài viết để chỉnh sửa.";
    pub const SLUG_AVAILABLE: &str = "Đường dẫn có thể sử dụng";
    pub const VIEW_ARTICLE: &str = "Xem bài viết";
}

pub mod article {
    pub const PUBLISHED_ON_TEMPLATE: &str = "Đăng ngày {}";
    pub const UPDATED_ON_TEMPLATE: &str = "Cập nhật ngày {}";
    pub const NOT_PUBLISHED: &str = "Bài viết chưa được xuất bản.";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Không tìm thấy trang";
    pub const BODY: &str = "Xin lỗi, trang bạn tìm không tồn tại.";
    pub const BACK_HOME: &str = "Về trang chủ";
}

pub mod errors {
    pub const NETWORK: &str = "Không thể kết nối tới máy chủ. Vui lòng kiểm tra mạng và thử lại.";
    pub const NOT_FOUND: &str = "Không tìm thấy dữ liệu yêu cầu.";
    pub const UNAUTHORIZED: &str = "Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.";
    pub const CONFLICT: &str = "Dữ liệu đã bị thay đổi hoặc trùng lặp.";
    pub const SERVER: &str = "Máy chủ gặp sự cố. Vui lòng thử lại sau.";
    pub const VALIDATION: &str = "Vui lòng kiểm tra lại các trường được đánh dấu.";
    pub const UNEXPECTED: &str = "Đã xảy ra lỗi không mong muốn. Vui lòng thử lại.";
}
