/// Builds a `Listener` that forwards every notification to `handler.method(id, value)`.
#[macro_export]
macro_rules! listener {
    ($handler:ident.$method:ident) => {
        $crate::Listener::new({
            let handler = $handler.clone();
            move |id, value| {
                let handler = handler.clone();
                async move {
                    handler.$method(id, value).await;
                }
            }
        })
    };
}
