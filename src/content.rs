//! Static slide content: one zero-argument view producer per slide.
//!
//! Producers are pure and allocate their content on demand. Only the
//! producer of the slide being shown is ever invoked.

use crate::types::{Accent, Body, Card, Icon, Section, SlideContent, SlideId, Stat, Step};

impl SlideId {
    /// Invoke this slide's view producer.
    pub fn content(self) -> SlideContent {
        match self {
            SlideId::Cover => cover(),
            SlideId::Intro => intro(),
            SlideId::Jtbd => jtbd(),
            SlideId::UserMap => user_map(),
            SlideId::Kano => kano(),
            SlideId::Metrics => metrics(),
            SlideId::Summary => summary(),
        }
    }
}

// ============================================================================
// PRODUCERS
// ============================================================================

pub fn cover() -> SlideContent {
    SlideContent {
        heading: "商业计划书",
        tagline: Some("基于校园订餐案例的产品需求与设计"),
        sections: vec![Section {
            title: "核心方向",
            caption: None,
            icon: None,
            accent: Accent::Neutral,
            body: Body::Cards(vec![
                Card {
                    icon: Icon::Target,
                    title: "需求分析",
                    text: "深入挖掘用户真实需求",
                    accent: Accent::Blue,
                },
                Card {
                    icon: Icon::Users,
                    title: "用户洞察",
                    text: "基于数据的用户行为分析",
                    accent: Accent::Purple,
                },
                Card {
                    icon: Icon::TrendingUp,
                    title: "商业价值",
                    text: "打造校园生态服务平台",
                    accent: Accent::Green,
                },
            ]),
        }],
        banner: None,
    }
}

pub fn intro() -> SlideContent {
    SlideContent {
        heading: "项目介绍",
        tagline: None,
        sections: vec![
            Section {
                title: "网站描述",
                caption: None,
                icon: None,
                accent: Accent::Blue,
                body: Body::Text("一个为在校大学生服务的送餐网站"),
            },
            Section {
                title: "项目背景",
                caption: None,
                icon: None,
                accent: Accent::Purple,
                body: Body::Text("大学生就餐难、排队时间长"),
            },
            Section {
                title: "需求分析",
                caption: Some("用户行为"),
                icon: None,
                accent: Accent::Green,
                body: Body::Stats(vec![
                    Stat {
                        label: "男生数量 > 女生",
                        value: "5",
                        unit: "倍",
                        accent: Accent::Green,
                    },
                    Stat {
                        label: "午餐非本人签收率",
                        value: "80",
                        unit: "%",
                        accent: Accent::Yellow,
                    },
                    Stat {
                        label: "晚间订餐量增长",
                        value: "1300",
                        unit: "%",
                        accent: Accent::Red,
                    },
                ]),
            },
            Section {
                title: "行为分析",
                caption: None,
                icon: None,
                accent: Accent::Green,
                body: Body::Text("学生的真实需求不仅是\"吃饭\"，而是\"不想中断当前的娱乐或学习\""),
            },
        ],
        banner: None,
    }
}

pub fn jtbd() -> SlideContent {
    SlideContent {
        heading: "JTBD（Job To Be Done）分析",
        tagline: None,
        sections: vec![
            Section {
                title: "推力 Push",
                caption: Some("现状的不满"),
                icon: Some(Icon::ArrowUp),
                accent: Accent::Red,
                body: Body::Bullets(vec![
                    "去食堂或超市要花时间排队、打包，打断午休或游戏节奏",
                    "让室友代买有\"欠人情\"压力，且不稳定",
                    "速食选择有限，长期吃不健康",
                    "外卖平台送进校园受限，配送慢、到校门口还要自取",
                ]),
            },
            Section {
                title: "拉力 Pull",
                caption: Some("新方案的吸引"),
                icon: Some(Icon::ArrowDown),
                accent: Accent::Green,
                body: Body::Bullets(vec![
                    "寝室直达：商品直接送到寝室门口，不用中断活动",
                    "品类丰富：既能点食堂餐食，又能买超市零食、饮料、生活用品",
                    "支付灵活：支持在线支付+货到付款，满足不同用户偏好",
                    "流程极简：3步下单，无需反复确认",
                    "实时追踪：能看到订单状态，心里有数",
                ]),
            },
            Section {
                title: "焦虑 Anxiety",
                caption: Some("改变的担忧"),
                icon: Some(Icon::AlertTriangle),
                accent: Accent::Yellow,
                body: Body::Bullets(vec![
                    "担心配送速度慢，导致饭菜凉了",
                    "害怕价格高于食堂或超市本价",
                    "担心寝室配送不准确（送错寝室/联系不上）",
                    "商品质量无法确认（比如饭菜分量、超市商品是否临期）",
                    "售后限制（校园商品不支持退货）可能让人犹豫",
                ]),
            },
            Section {
                title: "惯性 Habit",
                caption: Some("习惯的阻力"),
                icon: Some(Icon::RotateCcw),
                accent: Accent::Blue,
                body: Body::Bullets(vec![
                    "已习惯顺路去食堂/超市，认为\"自己买更放心\"",
                    "室友之间互相帮带饭，已有稳定的小社交习惯",
                    "对速食和外卖已形成固定消费模式，不愿意再学习新平台",
                    "部分同学有\"亲自挑选\"的习惯，特别是超市商品（水果、饮料口味）",
                ]),
            },
        ],
        banner: None,
    }
}

pub fn user_map() -> SlideContent {
    SlideContent {
        heading: "用户故事地图",
        tagline: None,
        sections: vec![Section {
            title: "下单旅程",
            caption: None,
            icon: None,
            accent: Accent::Purple,
            body: Body::Steps(vec![
                Step {
                    marker: "🔐",
                    title: "快速登录平台",
                    description: "通过学号或手机号注册/登录，不需要复杂流程，确保能在游戏开始前完成账号绑定，后续下单无需重复输入信息。",
                },
                Step {
                    marker: "📱",
                    title: "寝室内直接浏览商品",
                    description: "进入首页即可看到食堂和超市的商品列表，可以通过搜索或筛选快速找到想要的食品或日用品，无需出门。",
                },
                Step {
                    marker: "🔍",
                    title: "查看商品详情",
                    description: "点击商品后，可查看价格、库存、预计配送时间等关键信息，确认商品是否符合需求。",
                },
                Step {
                    marker: "🛒",
                    title: "快速加入购物车并下单",
                    description: "在游戏中途只需点击\"加入购物车\"或\"立即下单\"，即可完成选购，避免复杂操作，保持流程极简。",
                },
                Step {
                    marker: "🏠",
                    title: "填写寝室号与备注",
                    description: "在订单确认页面，直接选择已保存的寝室地址，或输入寝室号，并备注特殊需求（如\"轻轻敲门即可\"），确保准确送达。",
                },
                Step {
                    marker: "💳",
                    title: "自由选择支付方式",
                    description: "可选择在线支付或货到付款，满足不同支付偏好，保证体验灵活性。",
                },
                Step {
                    marker: "📊",
                    title: "实时查看订单状态",
                    description: "下单后，可随时查看订单配送进度，如\"已接单 → 配送中 → 已送达\"，避免无谓等待或焦虑。",
                },
                Step {
                    marker: "📝",
                    title: "收货后查看订单记录并反馈",
                    description: "在订单详情页确认收货，查看历史订单，并可对服务提出建议或投诉（如延迟、商品问题）。由于为校园商品，不支持退货，售后以反馈为主。",
                },
            ]),
        }],
        banner: None,
    }
}

pub fn kano() -> SlideContent {
    SlideContent {
        heading: "卡诺模型分析",
        tagline: None,
        sections: vec![
            Section {
                title: "基本型需求（必备）",
                caption: None,
                icon: None,
                accent: Accent::Red,
                body: Body::Text("快速配送、寝室直达、支付便捷"),
            },
            Section {
                title: "期望型需求（提升满意度）",
                caption: None,
                icon: None,
                accent: Accent::Orange,
                body: Body::Text("夜间下单及时响应、零食饮料选择丰富"),
            },
            Section {
                title: "兴奋型需求（惊喜）",
                caption: None,
                icon: None,
                accent: Accent::Green,
                body: Body::Text("个性化推荐、边玩游戏边下单的快捷入口"),
            },
        ],
        banner: None,
    }
}

pub fn metrics() -> SlideContent {
    SlideContent {
        heading: "关键指标与成果",
        tagline: None,
        sections: vec![
            Section {
                title: "关键指标",
                caption: None,
                icon: None,
                accent: Accent::Blue,
                body: Body::Stats(vec![
                    Stat {
                        label: "平均配送时长",
                        value: "≤",
                        unit: "15 分钟",
                        accent: Accent::Green,
                    },
                    Stat {
                        label: "用户留存率",
                        value: "≥",
                        unit: "40%",
                        accent: Accent::Green,
                    },
                    Stat {
                        label: "夜间活跃订单数提升",
                        value: "≥",
                        unit: "50%",
                        accent: Accent::Green,
                    },
                    Stat {
                        label: "平均客单价",
                        value: "↗",
                        unit: "持续增长",
                        accent: Accent::Green,
                    },
                ]),
            },
            Section {
                title: "预期成果",
                caption: None,
                icon: None,
                accent: Accent::Purple,
                body: Body::Cards(vec![
                    Card {
                        icon: Icon::Target,
                        title: "用户体验提升",
                        text: "提升学生消费便利性与体验",
                        accent: Accent::Blue,
                    },
                    Card {
                        icon: Icon::BarChart,
                        title: "商业价值",
                        text: "提高平台交易额，形成高频流量入口",
                        accent: Accent::Purple,
                    },
                    Card {
                        icon: Icon::Star,
                        title: "生态建设",
                        text: "打造校园电商生态闭环",
                        accent: Accent::Green,
                    },
                ]),
            },
        ],
        banner: None,
    }
}

pub fn summary() -> SlideContent {
    SlideContent {
        heading: "总结与展望",
        tagline: None,
        sections: vec![
            Section {
                title: "深度分析",
                caption: Some("📊"),
                icon: None,
                accent: Accent::Blue,
                body: Body::Text(
                    "本商业计划书通过 JTBD、用户故事地图、卡诺模型深入挖掘了学生群体的核心需求",
                ),
            },
            Section {
                title: "创新体验",
                caption: Some("💡"),
                icon: None,
                accent: Accent::Purple,
                body: Body::Text(
                    "产品不仅解决\"吃饭难\"，更创造了\"不打断娱乐也能即时消费\"的新体验",
                ),
            },
            Section {
                title: "未来展望",
                caption: Some("🚀"),
                icon: None,
                accent: Accent::Green,
                body: Body::Text("未来：拓展至学习用品、生活服务，形成校园全场景服务平台"),
            },
        ],
        banner: Some("感谢观看"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slide_has_a_heading_and_sections() {
        for id in SlideId::ALL {
            let content = id.content();
            assert!(!content.heading.is_empty(), "{id} has no heading");
            assert!(!content.sections.is_empty(), "{id} has no sections");
        }
    }

    #[test]
    fn jtbd_has_four_forces() {
        let content = jtbd();
        let titles: Vec<_> = content.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["推力 Push", "拉力 Pull", "焦虑 Anxiety", "惯性 Habit"]
        );
    }

    #[test]
    fn each_force_has_its_own_icon() {
        let icons: Vec<_> = jtbd().sections.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            vec![
                Some(Icon::ArrowUp),
                Some(Icon::ArrowDown),
                Some(Icon::AlertTriangle),
                Some(Icon::RotateCcw),
            ]
        );
        assert!(kano().sections.iter().all(|s| s.icon.is_none()));
    }

    #[test]
    fn user_map_lists_eight_steps() {
        let content = user_map();
        match &content.sections[0].body {
            Body::Steps(steps) => assert_eq!(steps.len(), 8),
            other => panic!("Expected Steps, got {:?}", other),
        }
    }

    #[test]
    fn only_summary_has_a_banner() {
        for id in SlideId::ALL {
            let has_banner = id.content().banner.is_some();
            assert_eq!(has_banner, id == SlideId::Summary, "{id}");
        }
    }

    #[test]
    fn dispatch_matches_direct_producer() {
        assert_eq!(SlideId::Kano.content(), kano());
        assert_eq!(SlideId::Cover.content(), cover());
    }
}
