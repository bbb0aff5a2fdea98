//! The table of known Application Identifiers.

use super::{AiComponent, AiEntry, Cset, Linter};

const fn n(min: u8, max: u8) -> AiComponent {
    AiComponent { cset: Cset::Numeric, min, max, linter: Linter::None }
}

const fn x(min: u8, max: u8) -> AiComponent {
    AiComponent { cset: Cset::Cset82, min, max, linter: Linter::None }
}

const fn c(min: u8, max: u8) -> AiComponent {
    AiComponent { cset: Cset::Cset39, min, max, linter: Linter::None }
}

const fn csum(part: AiComponent) -> AiComponent {
    AiComponent { linter: Linter::CheckDigit, ..part }
}

const fn csumalpha(part: AiComponent) -> AiComponent {
    AiComponent { linter: Linter::CheckPair, ..part }
}

const fn date(part: AiComponent) -> AiComponent {
    AiComponent { linter: Linter::Date, ..part }
}

const fn ai(code: &'static str, fnc1: bool, parts: &'static [AiComponent], title: &'static str) -> AiEntry {
    AiEntry { code, fnc1, parts, title }
}

pub(crate) static AI_TABLE: &[AiEntry] = &[
    ai("00", false, &[csum(n(18, 18))], "SSCC"),
    ai("01", false, &[csum(n(14, 14))], "GTIN"),
    ai("02", false, &[csum(n(14, 14))], "CONTENT"),
    ai("10", true, &[x(1, 20)], "BATCH/LOT"),
    ai("11", false, &[date(n(6, 6))], "PROD DATE"),
    ai("12", false, &[date(n(6, 6))], "DUE DATE"),
    ai("13", false, &[date(n(6, 6))], "PACK DATE"),
    ai("15", false, &[date(n(6, 6))], "BEST BEFORE or BEST BY"),
    ai("16", false, &[date(n(6, 6))], "SELL BY"),
    ai("17", false, &[date(n(6, 6))], "USE BY or EXPIRY"),
    ai("20", false, &[n(2, 2)], "VARIANT"),
    ai("21", true, &[x(1, 20)], "SERIAL"),
    ai("22", true, &[x(1, 20)], "CPV"),
    ai("235", true, &[x(1, 28)], "TPX"),
    ai("240", true, &[x(1, 30)], "ADDITIONAL ID"),
    ai("241", true, &[x(1, 30)], "CUST. PART NO."),
    ai("242", true, &[n(1, 6)], "MTO VARIANT"),
    ai("243", true, &[x(1, 20)], "PCN"),
    ai("250", true, &[x(1, 30)], "SECONDARY SERIAL"),
    ai("251", true, &[x(1, 30)], "REF. TO SOURCE"),
    ai("253", true, &[csum(n(13, 13)), x(0, 17)], "GDTI"),
    ai("254", true, &[x(1, 20)], "GLN EXTENSION COMPONENT"),
    ai("255", true, &[csum(n(13, 13)), n(0, 12)], "GCN"),
    ai("30", true, &[n(1, 8)], "VAR. COUNT"),
    ai("3100", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3101", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3102", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3103", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3104", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3105", false, &[n(6, 6)], "NET WEIGHT (kg)"),
    ai("3110", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3111", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3112", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3113", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3114", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3115", false, &[n(6, 6)], "LENGTH (m)"),
    ai("3120", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3121", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3122", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3123", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3124", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3125", false, &[n(6, 6)], "WIDTH (m)"),
    ai("3130", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3131", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3132", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3133", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3134", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3135", false, &[n(6, 6)], "HEIGHT (m)"),
    ai("3140", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3141", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3142", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3143", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3144", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3145", false, &[n(6, 6)], "AREA (m^2)"),
    ai("3150", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3151", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3152", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3153", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3154", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3155", false, &[n(6, 6)], "NET VOLUME (l)"),
    ai("3160", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3161", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3162", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3163", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3164", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3165", false, &[n(6, 6)], "NET VOLUME (m^3)"),
    ai("3200", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3201", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3202", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3203", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3204", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3205", false, &[n(6, 6)], "NET WEIGHT (lb)"),
    ai("3210", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3211", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3212", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3213", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3214", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3215", false, &[n(6, 6)], "LENGTH (i)"),
    ai("3220", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3221", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3222", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3223", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3224", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3225", false, &[n(6, 6)], "LENGTH (f)"),
    ai("3230", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3231", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3232", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3233", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3234", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3235", false, &[n(6, 6)], "LENGTH (y)"),
    ai("3240", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3241", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3242", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3243", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3244", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3245", false, &[n(6, 6)], "WIDTH (i)"),
    ai("3250", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3251", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3252", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3253", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3254", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3255", false, &[n(6, 6)], "WIDTH (f)"),
    ai("3260", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3261", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3262", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3263", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3264", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3265", false, &[n(6, 6)], "WIDTH (y)"),
    ai("3270", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3271", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3272", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3273", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3274", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3275", false, &[n(6, 6)], "HEIGHT (i)"),
    ai("3280", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3281", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3282", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3283", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3284", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3285", false, &[n(6, 6)], "HEIGHT (f)"),
    ai("3290", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3291", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3292", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3293", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3294", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3295", false, &[n(6, 6)], "HEIGHT (y)"),
    ai("3300", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3301", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3302", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3303", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3304", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3305", false, &[n(6, 6)], "GROSS WEIGHT (kg)"),
    ai("3310", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3311", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3312", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3313", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3314", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3315", false, &[n(6, 6)], "LENGTH (m), log"),
    ai("3320", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3321", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3322", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3323", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3324", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3325", false, &[n(6, 6)], "WIDTH (m), log"),
    ai("3330", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3331", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3332", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3333", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3334", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3335", false, &[n(6, 6)], "HEIGHT (m), log"),
    ai("3340", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3341", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3342", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3343", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3344", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3345", false, &[n(6, 6)], "AREA (m^2), log"),
    ai("3350", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3351", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3352", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3353", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3354", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3355", false, &[n(6, 6)], "VOLUME (l), log"),
    ai("3360", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3361", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3362", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3363", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3364", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3365", false, &[n(6, 6)], "VOLUME (m^3), log"),
    ai("3370", false, &[n(6, 6)], "KG PER m^2"),
    ai("3371", false, &[n(6, 6)], "KG PER m^2"),
    ai("3372", false, &[n(6, 6)], "KG PER m^2"),
    ai("3373", false, &[n(6, 6)], "KG PER m^2"),
    ai("3374", false, &[n(6, 6)], "KG PER m^2"),
    ai("3375", false, &[n(6, 6)], "KG PER m^2"),
    ai("3400", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3401", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3402", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3403", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3404", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3405", false, &[n(6, 6)], "GROSS WEIGHT (lb)"),
    ai("3410", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3411", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3412", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3413", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3414", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3415", false, &[n(6, 6)], "LENGTH (i), log"),
    ai("3420", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3421", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3422", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3423", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3424", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3425", false, &[n(6, 6)], "LENGTH (f), log"),
    ai("3430", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3431", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3432", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3433", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3434", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3435", false, &[n(6, 6)], "LENGTH (y), log"),
    ai("3440", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3441", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3442", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3443", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3444", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3445", false, &[n(6, 6)], "WIDTH (i), log"),
    ai("3450", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3451", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3452", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3453", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3454", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3455", false, &[n(6, 6)], "WIDTH (f), log"),
    ai("3460", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3461", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3462", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3463", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3464", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3465", false, &[n(6, 6)], "WIDTH (y), log"),
    ai("3470", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3471", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3472", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3473", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3474", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3475", false, &[n(6, 6)], "HEIGHT (i), log"),
    ai("3480", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3481", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3482", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3483", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3484", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3485", false, &[n(6, 6)], "HEIGHT (f), log"),
    ai("3490", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3491", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3492", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3493", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3494", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3495", false, &[n(6, 6)], "HEIGHT (y), log"),
    ai("3500", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3501", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3502", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3503", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3504", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3505", false, &[n(6, 6)], "AREA (i^2)"),
    ai("3510", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3511", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3512", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3513", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3514", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3515", false, &[n(6, 6)], "AREA (f^2)"),
    ai("3520", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3521", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3522", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3523", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3524", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3525", false, &[n(6, 6)], "AREA (y^2)"),
    ai("3530", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3531", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3532", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3533", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3534", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3535", false, &[n(6, 6)], "AREA (i^2), log"),
    ai("3540", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3541", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3542", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3543", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3544", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3545", false, &[n(6, 6)], "AREA (f^2), log"),
    ai("3550", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3551", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3552", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3553", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3554", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3555", false, &[n(6, 6)], "AREA (y^2), log"),
    ai("3560", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3561", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3562", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3563", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3564", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3565", false, &[n(6, 6)], "NET WEIGHT (t)"),
    ai("3570", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3571", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3572", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3573", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3574", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3575", false, &[n(6, 6)], "NET VOLUME (oz)"),
    ai("3600", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3601", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3602", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3603", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3604", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3605", false, &[n(6, 6)], "NET VOLUME (q)"),
    ai("3610", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3611", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3612", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3613", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3614", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3615", false, &[n(6, 6)], "NET VOLUME (g)"),
    ai("3620", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3621", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3622", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3623", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3624", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3625", false, &[n(6, 6)], "VOLUME (q), log"),
    ai("3630", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3631", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3632", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3633", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3634", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3635", false, &[n(6, 6)], "VOLUME (g), log"),
    ai("3640", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3641", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3642", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3643", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3644", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3645", false, &[n(6, 6)], "VOLUME (i^3)"),
    ai("3650", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3651", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3652", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3653", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3654", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3655", false, &[n(6, 6)], "VOLUME (f^3)"),
    ai("3660", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3661", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3662", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3663", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3664", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3665", false, &[n(6, 6)], "VOLUME (y^3)"),
    ai("3670", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3671", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3672", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3673", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3674", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3675", false, &[n(6, 6)], "VOLUME (i^3), log"),
    ai("3680", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3681", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3682", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3683", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3684", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3685", false, &[n(6, 6)], "VOLUME (f^3), log"),
    ai("3690", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("3691", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("3692", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("3693", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("3694", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("3695", false, &[n(6, 6)], "VOLUME (y^3), log"),
    ai("37", true, &[n(1, 8)], "COUNT"),
    ai("3900", true, &[n(1, 15)], "AMOUNT"),
    ai("3901", true, &[n(1, 15)], "AMOUNT"),
    ai("3902", true, &[n(1, 15)], "AMOUNT"),
    ai("3903", true, &[n(1, 15)], "AMOUNT"),
    ai("3904", true, &[n(1, 15)], "AMOUNT"),
    ai("3905", true, &[n(1, 15)], "AMOUNT"),
    ai("3906", true, &[n(1, 15)], "AMOUNT"),
    ai("3907", true, &[n(1, 15)], "AMOUNT"),
    ai("3908", true, &[n(1, 15)], "AMOUNT"),
    ai("3909", true, &[n(1, 15)], "AMOUNT"),
    ai("3910", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3911", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3912", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3913", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3914", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3915", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3916", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3917", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3918", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3919", true, &[n(3, 3), n(1, 15)], "AMOUNT"),
    ai("3920", true, &[n(1, 15)], "PRICE"),
    ai("3921", true, &[n(1, 15)], "PRICE"),
    ai("3922", true, &[n(1, 15)], "PRICE"),
    ai("3923", true, &[n(1, 15)], "PRICE"),
    ai("3924", true, &[n(1, 15)], "PRICE"),
    ai("3925", true, &[n(1, 15)], "PRICE"),
    ai("3926", true, &[n(1, 15)], "PRICE"),
    ai("3927", true, &[n(1, 15)], "PRICE"),
    ai("3928", true, &[n(1, 15)], "PRICE"),
    ai("3929", true, &[n(1, 15)], "PRICE"),
    ai("3930", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3931", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3932", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3933", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3934", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3935", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3936", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3937", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3938", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3939", true, &[n(3, 3), n(1, 15)], "PRICE"),
    ai("3940", true, &[n(4, 4)], "PRCNT OFF"),
    ai("3941", true, &[n(4, 4)], "PRCNT OFF"),
    ai("3942", true, &[n(4, 4)], "PRCNT OFF"),
    ai("3943", true, &[n(4, 4)], "PRCNT OFF"),
    ai("3950", true, &[n(6, 6)], "PRICE/UoM"),
    ai("3951", true, &[n(6, 6)], "PRICE/UoM"),
    ai("3952", true, &[n(6, 6)], "PRICE/UoM"),
    ai("3953", true, &[n(6, 6)], "PRICE/UoM"),
    ai("3954", true, &[n(6, 6)], "PRICE/UoM"),
    ai("3955", true, &[n(6, 6)], "PRICE/UoM"),
    ai("400", true, &[x(1, 30)], "ORDER NUMBER"),
    ai("401", true, &[x(1, 30)], "GINC"),
    ai("402", true, &[csum(n(17, 17))], "GSIN"),
    ai("403", true, &[x(1, 30)], "ROUTE"),
    ai("410", false, &[csum(n(13, 13))], "SHIP TO LOC"),
    ai("411", false, &[csum(n(13, 13))], "BILL TO"),
    ai("412", false, &[csum(n(13, 13))], "PURCHASE FROM"),
    ai("413", false, &[csum(n(13, 13))], "SHIP FOR LOC"),
    ai("414", false, &[csum(n(13, 13))], "LOC NO."),
    ai("415", false, &[csum(n(13, 13))], "PAY TO"),
    ai("416", false, &[csum(n(13, 13))], "PROD/SERV LOC"),
    ai("417", false, &[csum(n(13, 13))], "PARTY"),
    ai("420", true, &[x(1, 20)], "SHIP TO POST"),
    ai("421", true, &[n(3, 3), x(1, 9)], "SHIP TO POST"),
    ai("422", true, &[n(3, 3)], "ORIGIN"),
    ai("423", true, &[n(3, 15)], "COUNTRY - INITIAL PROCESS"),
    ai("424", true, &[n(3, 3)], "COUNTRY - PROCESS"),
    ai("425", true, &[n(3, 15)], "COUNTRY - DISASSEMBLY"),
    ai("426", true, &[n(3, 3)], "COUNTRY - FULL PROCESS"),
    ai("427", true, &[x(1, 3)], "ORIGIN SUBDIVISION"),
    ai("4300", true, &[x(1, 35)], "SHIP TO COMP"),
    ai("4301", true, &[x(1, 35)], "SHIP TO NAME"),
    ai("4302", true, &[x(1, 70)], "SHIP TO ADD1"),
    ai("4303", true, &[x(1, 70)], "SHIP TO ADD2"),
    ai("4304", true, &[x(1, 70)], "SHIP TO SUB"),
    ai("4305", true, &[x(1, 70)], "SHIP TO LOC"),
    ai("4306", true, &[x(1, 70)], "SHIP TO REG"),
    ai("4307", true, &[x(2, 2)], "SHIP TO COUNTRY"),
    ai("4308", true, &[x(1, 30)], "SHIP TO PHONE"),
    ai("4310", true, &[x(1, 35)], "RTN TO COMP"),
    ai("4311", true, &[x(1, 35)], "RTN TO NAME"),
    ai("4312", true, &[x(1, 70)], "RTN TO ADD1"),
    ai("4313", true, &[x(1, 70)], "RTN TO ADD2"),
    ai("4314", true, &[x(1, 70)], "RTN TO SUB"),
    ai("4315", true, &[x(1, 70)], "RTN TO LOC"),
    ai("4316", true, &[x(1, 70)], "RTN TO REG"),
    ai("4317", true, &[x(2, 2)], "RTN TO COUNTRY"),
    ai("4318", true, &[x(1, 20)], "RTN TO POST"),
    ai("4319", true, &[x(1, 30)], "RTN TO PHONE"),
    ai("4320", true, &[x(1, 35)], "SRV DESCRIPTION"),
    ai("4321", true, &[n(1, 1)], "DANGEROUS GOODS"),
    ai("4322", true, &[n(1, 1)], "AUTH LEAVE"),
    ai("4323", true, &[n(1, 1)], "SIG REQUIRED"),
    ai("4324", true, &[n(6, 6), n(4, 4)], "NBEF DEL DT."),
    ai("4325", true, &[n(6, 6), n(4, 4)], "NAFT DEL DT."),
    ai("4326", true, &[n(6, 6)], "REL DATE"),
    ai("7001", true, &[n(13, 13)], "NSN"),
    ai("7002", true, &[x(1, 30)], "MEAT CUT"),
    ai("7003", true, &[n(6, 6), n(4, 4)], "EXPIRY TIME"),
    ai("7004", true, &[n(1, 4)], "ACTIVE POTENCY"),
    ai("7005", true, &[x(1, 12)], "CATCH AREA"),
    ai("7006", true, &[n(6, 6)], "FIRST FREEZE DATE"),
    ai("7007", true, &[n(6, 6), n(0, 6)], "HARVEST DATE"),
    ai("7008", true, &[x(1, 3)], "AQUATIC SPECIES"),
    ai("7009", true, &[x(1, 10)], "FISHING GEAR TYPE"),
    ai("7010", true, &[x(1, 2)], "PROD METHOD"),
    ai("7020", true, &[x(1, 20)], "REFURB LOT"),
    ai("7021", true, &[x(1, 20)], "FUNC STAT"),
    ai("7022", true, &[x(1, 20)], "REV STAT"),
    ai("7023", true, &[x(1, 30)], "GIAI - ASSEMBLY"),
    ai("7030", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7031", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7032", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7033", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7034", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7035", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7036", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7037", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7038", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7039", true, &[n(3, 3), x(1, 27)], "PROCESSOR # s"),
    ai("7040", true, &[n(1, 1), x(1, 1), x(1, 1), x(1, 1)], "UIC+EXT"),
    ai("710", true, &[x(1, 20)], "NHRN PZN"),
    ai("711", true, &[x(1, 20)], "NHRN CIP"),
    ai("712", true, &[x(1, 20)], "NHRN CN"),
    ai("713", true, &[x(1, 20)], "NHRN DRN"),
    ai("714", true, &[x(1, 20)], "NHRN AIM"),
    ai("7230", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7231", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7232", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7233", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7234", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7235", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7236", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7237", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7238", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7239", true, &[x(2, 2), x(1, 28)], "CERT # s"),
    ai("7240", true, &[x(1, 20)], "PROTOCOL"),
    ai("8001", true, &[n(4, 4), n(5, 5), n(3, 3), n(1, 1), n(1, 1)], "DIMENSIONS"),
    ai("8002", true, &[x(1, 20)], "CMT NO."),
    ai("8003", true, &[n(1, 1), csum(n(13, 13)), x(0, 16)], "GRAI"),
    ai("8004", true, &[x(1, 30)], "GIAI"),
    ai("8005", true, &[n(6, 6)], "PRICE PER UNIT"),
    ai("8006", true, &[csum(n(14, 14)), n(4, 4)], "ITIP"),
    ai("8007", true, &[x(1, 34)], "IBAN"),
    ai("8008", true, &[n(8, 8), n(0, 4)], "PROD TIME"),
    ai("8009", true, &[x(1, 50)], "OPTSEN"),
    ai("8010", true, &[c(1, 30)], "CPID"),
    ai("8011", true, &[n(1, 12)], "CPID SERIAL"),
    ai("8012", true, &[x(1, 20)], "VERSION"),
    ai("8013", true, &[csumalpha(x(1, 25))], "GMN"),
    ai("8017", true, &[csum(n(18, 18))], "GSRN - PROVIDER"),
    ai("8018", true, &[csum(n(18, 18))], "GSRN - RECIPIENT"),
    ai("8019", true, &[n(1, 10)], "SRIN"),
    ai("8020", true, &[x(1, 25)], "REF NO."),
    ai("8026", true, &[csum(n(14, 14)), n(4, 4)], "ITIP CONTENT"),
    ai("8110", true, &[x(1, 70)], ""),
    ai("8111", true, &[n(4, 4)], "POINTS"),
    ai("8112", true, &[x(1, 70)], ""),
    ai("8200", true, &[x(1, 70)], "PRODUCT URL"),
    ai("90", true, &[x(1, 30)], "INTERNAL"),
    ai("91", true, &[x(1, 90)], "INTERNAL"),
    ai("92", true, &[x(1, 90)], "INTERNAL"),
    ai("93", true, &[x(1, 90)], "INTERNAL"),
    ai("94", true, &[x(1, 90)], "INTERNAL"),
    ai("95", true, &[x(1, 90)], "INTERNAL"),
    ai("96", true, &[x(1, 90)], "INTERNAL"),
    ai("97", true, &[x(1, 90)], "INTERNAL"),
    ai("98", true, &[x(1, 90)], "INTERNAL"),
];
