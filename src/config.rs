// Official WhatsApp number leads are handed off to. Override at build
// time with DRW_WA_NUMBER for staging funnels.
pub fn get_wa_number() -> &'static str {
    match option_env!("DRW_WA_NUMBER") {
        Some(number) => number,
        None => "62882005295884",
    }
}
