//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 진행 단계와 초기화 결과를 보기 좋게 출력합니다.

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Catalog Service Backend             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{:^width$}║\n╚{border}╝", title, width = BOX_WIDTH)
}

/// `→ Step 1: Connecting data stores`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Data stores connected (2 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 구성 완료 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}
