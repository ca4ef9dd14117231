use crate::components::icons::IconKind;
use crate::nav::sections::SectionId;

pub struct ServiceCard {
    pub icon: IconKind,
    pub title: &'static str,
    pub text: &'static str,
}

pub static SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        icon: IconKind::Code,
        title: "Разработка сайтов",
        text: "Создание современных, адаптивных и функциональных веб-сайтов под ваши потребности и бюджет.",
    },
    ServiceCard {
        icon: IconKind::Globe,
        title: "Регистрация доменов",
        text: "Помощь в выборе и регистрации доменного имени для вашего сайта, включая домены в зоне .kz.",
    },
    ServiceCard {
        icon: IconKind::DollarSign,
        title: "Доступные цены",
        text: "Прозрачное ценообразование и гибкие условия оплаты для клиентов с любым бюджетом.",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub enum PlanAccent {
    Blue,
    Purple,
}

pub struct Plan {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 4],
    pub accent: PlanAccent,
}

pub static PLANS: [Plan; 2] = [
    Plan {
        title: "Создание сайта",
        subtitle: "Базовая разработка веб-сайта",
        price: "10.000 ТГ",
        features: [
            "Адаптивный дизайн",
            "Базовая SEO-оптимизация",
            "До 5 страниц",
            "Базовая функциональность",
        ],
        accent: PlanAccent::Blue,
    },
    Plan {
        title: "Регистрация домена",
        subtitle: "Домен в зоне .kz",
        price: "Зависит от домена",
        features: [
            "Регистрация домена (например, названиесайта.kz)",
            "Привязка домена к хостингу",
            "Настройка DNS",
            "Помощь в продлении домена",
        ],
        accent: PlanAccent::Purple,
    },
];

pub static DOMAIN_HELP: [&str; 4] = [
    "Выбрать подходящее доменное имя",
    "Зарегистрировать домен в зоне .kz или другой",
    "Настроить и привязать домен к вашему сайту",
    "Обеспечить своевременное продление домена",
];

// (zone, region)
pub static DOMAIN_ZONES: [(&str, &str); 4] = [
    (".kz", "Казахстан"),
    (".com", "Международный"),
    (".ru", "Россия"),
    (".org", "Организации"),
];

pub static ABOUT_PRINCIPLES: [&str; 4] = [
    "Индивидуальный подход к каждому проекту",
    "Соблюдение сроков и бюджета",
    "Использование современных технологий",
    "Поддержка после запуска проекта",
];

// (heading, value)
pub static PROFILE_FACTS: [(&str, &str); 3] = [
    ("Опыт работы", "1 год в веб-разработке"),
    ("Технологии", "HTML, CSS, JavaScript, React, WordPress"),
    ("Проекты", "10 успешно реализованных проектов"),
];

pub struct FooterLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub static FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Разработка сайтов", target: SectionId::Services },
    FooterLink { label: "Регистрация доменов", target: SectionId::Domain },
    FooterLink { label: "Цены на услуги", target: SectionId::Pricing },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_links_target_content_sections() {
        let targets: Vec<_> = FOOTER_LINKS.iter().map(|link| link.target).collect();
        assert_eq!(targets, [SectionId::Services, SectionId::Domain, SectionId::Pricing]);
    }

    #[test]
    fn kz_zone_is_listed_first() {
        assert_eq!(DOMAIN_ZONES[0], (".kz", "Казахстан"));
    }
}
