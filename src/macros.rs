#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

#[macro_export]
macro_rules! lumi_trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[macro_export]
macro_rules! lumi_debug {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! lumi_info {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! lumi_warn {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! lumi_error {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
