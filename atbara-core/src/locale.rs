use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Locale {
    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Arabic => TextDirection::RightToLeft,
            Locale::English => TextDirection::LeftToRight,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        }
    }

    pub fn toggled(&self) -> Locale {
        match self {
            Locale::Arabic => Locale::English,
            Locale::English => Locale::Arabic,
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Locale::Arabic),
            "en" | "english" => Ok(Locale::English),
            other => Err(CoreError::ValidationError(format!("unsupported locale '{}'", other))),
        }
    }
}

/// Key → display string in the active locale. Never affects booking logic.
pub trait Translator: Send + Sync {
    fn locale(&self) -> Locale;

    /// Unknown keys come back unchanged
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// (key, English, Arabic)
const ENTRIES: &[(&str, &str, &str)] = &[
    ("atbara.rail", "Atbara Rail", "سكك حديد عطبرة"),
    ("home", "Home", "الرئيسية"),
    ("search", "Search", "بحث"),
    ("dashboard", "My Trips", "رحلاتي"),
    ("admin", "Admin", "الإدارة"),
    ("loading", "Loading...", "جاري التحميل..."),
    ("back", "Back to", "العودة إلى"),
    ("next", "Next", "التالي"),
    ("previous", "Previous", "السابق"),
    ("not.found", "Not found", "غير موجود"),
    // home
    ("book.your.journey", "Book your train journey", "احجز رحلتك بالقطار"),
    ("cities", "Cities", "المدن"),
    ("from", "From", "من"),
    ("to", "To", "إلى"),
    ("travel.date", "Travel Date", "تاريخ السفر"),
    ("search.trains", "Search Trains", "ابحث عن القطارات"),
    // cities
    ("khartoum", "Khartoum", "الخرطوم"),
    ("atbara", "Atbara", "عطبرة"),
    ("port.sudan", "Port Sudan", "بورتسودان"),
    ("kassala", "Kassala", "كسلا"),
    ("wad.medani", "Wad Medani", "ود مدني"),
    ("nyala", "Nyala", "نيالا"),
    ("el.obeid", "El Obeid", "الأبيض"),
    ("dongola", "Dongola", "دنقلا"),
    ("sennar", "Sennar", "سنار"),
    // search results
    ("available.trains", "Available Trains", "القطارات المتاحة"),
    ("trains.found", "trains found", "قطار متاح"),
    ("no.trains", "No trains match your search", "لا توجد قطارات مطابقة لبحثك"),
    ("seats.available", "seats available", "مقعد متاح"),
    ("per.person", "per person", "للشخص"),
    ("book.now", "Book Now", "احجز الآن"),
    ("departure", "Departure", "المغادرة"),
    ("arrival", "Arrival", "الوصول"),
    ("duration", "Duration", "المدة"),
    ("price", "Price", "السعر"),
    ("class", "Class", "الدرجة"),
    ("economy", "Economy", "اقتصادية"),
    ("business", "Business", "رجال الأعمال"),
    ("vip", "VIP", "كبار الشخصيات"),
    ("all.classes", "All Classes", "جميع الدرجات"),
    ("filters", "Filters", "التصفية"),
    ("sort.by", "Sort by", "ترتيب حسب"),
    ("departure.time", "Departure Time", "وقت المغادرة"),
    ("passengers", "passengers", "ركاب"),
    // booking wizard
    ("passenger.info", "Passenger Information", "معلومات الراكب"),
    ("seat.selection", "Seat Selection", "اختيار المقعد"),
    ("payment", "Payment", "الدفع"),
    ("confirm", "Confirmation", "التأكيد"),
    ("full.name.arabic", "Full Name (Arabic)", "الاسم الكامل بالعربية"),
    ("full.name.english", "Full Name (English)", "الاسم الكامل بالإنجليزية"),
    ("id.passport.number", "ID / Passport Number", "رقم الهوية أو جواز السفر"),
    ("birth.date", "Date of Birth", "تاريخ الميلاد"),
    ("gender", "Gender", "الجنس"),
    ("male", "Male", "ذكر"),
    ("female", "Female", "أنثى"),
    ("nationality", "Nationality", "الجنسية"),
    ("phone", "Phone", "الهاتف"),
    ("email", "Email", "البريد الإلكتروني"),
    ("optional", "optional", "اختياري"),
    ("field.required", "Please fill in", "يرجى تعبئة"),
    ("available", "Available", "متاح"),
    ("occupied", "Occupied", "محجوز"),
    ("selected", "Selected", "محدد"),
    ("selected.seat", "Selected seat", "المقعد المحدد"),
    ("auto.select.seat", "Auto-select seat", "اختيار مقعد تلقائي"),
    ("seat.required", "Please choose a seat", "يرجى اختيار مقعد"),
    ("choose.payment.method", "Choose a payment method", "اختر طريقة الدفع"),
    ("credit.debit.card", "Credit / Debit Card", "بطاقة ائتمان / خصم"),
    ("mobile.payment", "Mobile Payment", "الدفع عبر الجوال"),
    ("bank.transfer", "Bank Transfer", "تحويل بنكي"),
    ("pay.via.bank", "Pay via your bank", "ادفع عبر البنك"),
    ("cardholder.name", "Cardholder Name", "اسم حامل البطاقة"),
    ("card.number", "Card Number", "رقم البطاقة"),
    ("expiry.date", "Expiry Date", "تاريخ الانتهاء"),
    ("cvv", "CVV", "CVV"),
    ("agree.terms.conditions", "I agree to the terms and conditions", "أوافق على الشروط والأحكام"),
    ("terms.required", "Please accept the terms and conditions", "يرجى الموافقة على الشروط والأحكام"),
    ("continue.payment", "Pay", "ادفع"),
    ("booking.confirmed", "Booking Confirmed", "تم تأكيد الحجز"),
    ("ticket.booked.successfully", "Your ticket has been booked successfully", "تم حجز تذكرتك بنجاح"),
    ("booking.reference", "Booking Reference", "رقم الحجز"),
    ("scan.at.station", "Scan this code at the station", "امسح هذا الرمز في المحطة"),
    ("view.my.trips", "View My Trips", "عرض رحلاتي"),
    ("book.another.trip", "Book Another Trip", "احجز رحلة أخرى"),
    ("no.train.selected", "No train selected", "لم يتم اختيار قطار"),
    ("back.to.search", "Back to search", "العودة إلى البحث"),
    ("booking.summary", "Booking Summary", "ملخص الحجز"),
    ("route", "Route", "المسار"),
    ("seat", "Seat", "المقعد"),
    ("ticket.price", "Ticket Price", "سعر التذكرة"),
    ("service.fee", "Service Fee", "رسوم الخدمة"),
    ("total", "Total", "الإجمالي"),
    ("secure.payment.guaranteed", "Secure payment guaranteed", "دفع آمن ومضمون"),
    ("sdg", "SDG", "ج.س"),
    // dashboard
    ("my.trips", "My Trips", "رحلاتي"),
    ("welcome.back", "Welcome back", "مرحباً بعودتك"),
    ("upcoming", "Upcoming", "القادمة"),
    ("past", "Past", "السابقة"),
    ("download.ticket", "Download Ticket", "تحميل التذكرة"),
    ("cancel.trip", "Cancel Trip", "إلغاء الرحلة"),
    ("no.upcoming.trips", "No upcoming trips", "لا توجد رحلات قادمة"),
    ("no.past.trips", "No past trips", "لا توجد رحلات سابقة"),
    ("e.ticket", "E-Ticket", "التذكرة الإلكترونية"),
    ("scan.qr.code", "Scan the QR code when boarding", "امسح رمز QR عند الصعود"),
    ("booking.ref", "Booking Ref", "رقم الحجز"),
    ("train", "Train", "القطار"),
    ("date", "Date", "التاريخ"),
    // admin
    ("access.denied", "Access Denied", "تم رفض الوصول"),
    ("no.permission", "You do not have permission to view this page", "ليس لديك صلاحية لعرض هذه الصفحة"),
    ("admin.dashboard", "Admin Dashboard", "لوحة الإدارة"),
    ("total.bookings", "Total Bookings", "إجمالي الحجوزات"),
    ("total.revenue", "Total Revenue", "إجمالي الإيرادات"),
    ("total.trains", "Total Trains", "إجمالي القطارات"),
    ("total.users", "Total Users", "إجمالي المستخدمين"),
    ("recent.activity", "Recent Activity", "النشاط الأخير"),
    ("train.routes", "Train Routes", "مسارات القطارات"),
    ("capacity", "Capacity", "السعة"),
    ("recent.bookings", "Recent Bookings", "الحجوزات الأخيرة"),
    ("confirmed", "Confirmed", "مؤكد"),
    ("cancelled", "Cancelled", "ملغي"),
    ("user.management", "User Management", "إدارة المستخدمين"),
    ("joined", "Joined", "انضم"),
    ("trips", "trips", "رحلات"),
    ("minutes.ago", "minutes ago", "دقائق مضت"),
    ("new.booking", "New booking", "حجز جديد"),
    ("payment.received", "Payment received", "تم استلام الدفع"),
    ("train.schedule.updated", "Train schedule updated", "تم تحديث جدول القطار"),
    ("new.user.registration", "New user registration", "تسجيل مستخدم جديد"),
];

/// Built-in two-locale table
pub struct StaticTranslator {
    locale: Locale,
    table: HashMap<&'static str, &'static str>,
}

impl StaticTranslator {
    pub fn new(locale: Locale) -> Self {
        let table = ENTRIES
            .iter()
            .map(|(key, en, ar)| {
                let text = match locale {
                    Locale::English => *en,
                    Locale::Arabic => *ar,
                };
                (*key, text)
            })
            .collect();
        Self { locale, table }
    }
}

impl Translator for StaticTranslator {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.table.get(key) {
            Some(text) => Cow::Borrowed(*text),
            None => {
                tracing::debug!(key, locale = self.locale.code(), "Missing translation");
                Cow::Borrowed(key)
            }
        }
    }
}
