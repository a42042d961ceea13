// ==========================================
// 集成测试辅助模块
// ==========================================
#![allow(dead_code)]

pub mod mock_backend;
pub mod test_data_builder;
