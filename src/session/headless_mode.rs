//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::backend::request_timeout;
use crate::consts::dashboard::loading_duration;
use crate::ui::dashboard::DashboardView;
use std::error::Error;

/// Runs one dashboard mount without a terminal UI
///
/// Mounts the view, waits for the loading gate and the profile lookup to
/// complete (bounded by two request timeouts), prints the diagnostics and the
/// agent, then unmounts.
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let mut view = DashboardView::mount(session.collaborators, &session.ui_config);
    let deadline = loading_duration() + request_timeout() * 2;
    let settled = tokio::time::timeout(deadline, async {
        while !view.is_settled() {
            if !view.next_update().await {
                break;
            }
        }
    })
    .await
    .is_ok();
    view.unmount();

    for event in view.diagnostics.iter().filter(|event| event.should_display()) {
        println!("{}", event);
    }
    if !settled {
        println!("Agent lookup did not complete in time");
    }
    match view.profile() {
        Some(profile) => println!(
            "Agent: {} ({})",
            profile.name,
            profile.video_source().src
        ),
        None => println!("Agent: none"),
    }

    print_session_exit_success();
    Ok(())
}
