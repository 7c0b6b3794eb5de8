// spanned error helpers in the style of pyo3-macros-backend

/// Build a `syn::Error` pointing at a span.
macro_rules! err_spanned {
    ($span:expr => $msg:expr) => {
        syn::Error::new($span, $msg)
    };
}

/// Return early with a `syn::Error` pointing at a span.
macro_rules! bail_spanned {
    ($span:expr => $msg:expr) => {
        return Err(err_spanned!($span => $msg))
    };
}
