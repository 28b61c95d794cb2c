//! 页面提示条
//!
//! `(消息内容, 是否出错)`，设置后 3 秒自动消失。

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_MILLIS: u32 = 3_000;

pub type Notice = Option<(String, bool)>;

/// 显示提示，到期后若内容未被替换则清除
pub fn flash(set_notice: WriteSignal<Notice>, message: impl Into<String>, is_error: bool) {
    let message = message.into();
    set_notice.set(Some((message.clone(), is_error)));
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MILLIS).await;
        set_notice.try_update(|current| {
            if current.as_ref().is_some_and(|(m, _)| *m == message) {
                *current = None;
            }
        });
    });
}

#[component]
pub fn NoticeBar(notice: ReadSignal<Notice>) -> impl IntoView {
    move || {
        notice.get().map(|(message, is_error)| {
            let class = if is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="alert" class=class>
                        <span>{message}</span>
                    </div>
                </div>
            }
        })
    }
}
