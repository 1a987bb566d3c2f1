//! Chinese text bundle.

use super::*;

pub(super) static TEXT: UiText = UiText {
    nav: NavText {
        home: "首页",
        essay_writer: "AI 论文写作",
        detector: "AI 检测器",
        web: "网页",
        mobile: "手机",
    },
    hero: HeroText {
        title: "可直接提交的学术成果",
        subtitle: "生成即成品，绝非仅供参考",
    },
    carousel: CarouselText {
        title: "最终交付内容",
        anchor: "不是草稿，不是示例。是您可以直接提交的成品。",
        cards: [
            CarouselCard { id: 1, title: "完整的学术论文", tag: "可直接提交" },
            CarouselCard { id: 2, title: "验证过的参考文献", tag: "与正文对应" },
            CarouselCard { id: 3, title: "摘要与常见问题", tag: "包含关键点" },
            CarouselCard { id: 4, title: "写作策略说明", tag: "结构逻辑清晰" },
        ],
    },
    form: FormText {
        type_label: "类型",
        level_label: "学术等级",
        topic_label: "题目或名称",
        topic_placeholder: "作业的题目或名称",
        instructions_label: "写作说明与备注",
        req_section_title: "编辑器",
        missing_hint: "插入模板:",
        add_constraints: "添加限制条件",
        missing_suggestions: ["字数要求", "引用格式", "参考文献", "截止日期"],
        constraint_templates: [
            "- 字数要求：",
            "- 引用格式：",
            "- 参考文献：至少 5 篇同行评审文献",
            "- 截止日期：",
        ],
        attach_ref: "添加参考资料",
        attach_ref_tooltip: "上传学术论文、老师提供的阅读清单或课程资料，作为写作参考。",
        ref_list_label: "参考资料",
        ref_disclaimer: "仅供写作参考，不会覆盖下方说明。",
        remove: "移除",
        outline_label: "大纲",
        outline_ai: "AI 智能大纲",
        outline_custom: "自定义大纲",
        word_count_label: "字数",
        language_label: "语言",
        citation_label: "引用格式",
        figures_label: "图表与公式",
        extra_charts: "包含图表",
        extra_formulas: "包含公式",
        submit_button: "生成我的论文",
    },
    order: OrderText {
        config_title: "论文配置",
        untitled: "未命名论文",
        edit: "编辑详情",
        back: "返回",
        sample_previews: "样例预览",
        sample_desc: "查看示例输出。最终文件将按照您的主题和要求生成。",
        preview_samples: "预览样例",
        all_in_one: "一站式服务",
        core_paper: "1. 核心论文",
        review: "2. 复习与理解",
        revision: "3. 修改",
        addons_title: "附加服务",
        similarity_title: "查重 & AI 检测报告",
        slides_title: "演示文稿",
        soon: "即将上线",
        recommended: "推荐",
        addon_label: "附加服务 (Turnitin 官方报告)",
        total: "总计",
        pay_button: "支付",
        pay_notice: "支付功能即将上线！",
        secure_payment: "SSL 安全支付",
        close_preview: "关闭预览",
        sample_preview: "样例预览",
        high_fidelity: "高保真样例",
        sample_placeholder: "这是样例的占位符。在生产环境中，这将显示高分辨率 PDF 或交互式文档查看器以展示输出质量。",
        click_hint: "点击预览",
        faqs: [
            Faq {
                question: "问：EssayPass 的论文会被检测出来吗？",
                answer: "答：我们的引擎使用学术逻辑逐行写作，不同于标准 LLM。此外，您可以添加官方 Turnitin 报告作为证明。",
            },
            Faq {
                question: "问：生成的草稿真的能用吗？",
                answer: "答：是的。您将获得真实的引用（与正文匹配）、清晰的大纲和经过验证的参考文献列表。这是可直接提交的成品。",
            },
        ],
        trusted_by: "已获信赖",
        students: "500万+ 学生",
        deliverables: Deliverables {
            paper: Deliverable { title: "可提交的论文", format: "DOCX/PDF" },
            summary: Deliverable { title: "一页摘要", format: "PDF" },
            faq: Deliverable { title: "主题常见问题", format: "PDF" },
            strategy: Deliverable { title: "写作策略", format: "PDF" },
            refs: Deliverable { title: "参考文献全文", format: "ZIP/PDF" },
            agent: Deliverable { title: "AI 代理上下文", format: "聊天记录" },
        },
        preview_titles: PreviewTitles {
            paper: "最终论文样例",
            summary: "执行摘要样例",
            faq: "主题 FAQ 与分析样例",
            strategy: "逻辑与策略图样例",
            refs: "已验证参考文献样例",
            all: "交付物概览样例",
        },
    },
    detector: DetectorText {
        hero_title: "免费 AI 检测",
        hero_title_highlight: "专为论文",
        hero_subtitle: "在老师之前，先检查您的论文是否会被识别为 AI 写作。",
        identify_risks: "识别 AI 风险",
        professional_solution: "专业解决方案",
        upload_prompt: "上传文件",
        upload_supported: "支持 .docx 和 .pdf",
        detect_button: "开始检测",
        detecting: "检测中...",
        remove_file: "移除文件",
        notes: ["📝 仅支持英文文本", "🖼️ 不分析图片", "📄 最大 10MB"],
        why: WhyEssayPass {
            badge: "为什么选择 EssayPass",
            heading: "一次写对，无需返工",
            general_risk: "通用 AI：高风险",
            essay_pass_safe: "EssayPass：安全",
            cta: "试用 AI 论文写作",
            features: [
                Feature {
                    icon: "check",
                    title: "媲美人工的写作",
                    description: "逐行学术推理，而非千篇一律的 LLM 输出。",
                },
                Feature {
                    icon: "book",
                    title: "真实可查的文献",
                    description: "每条引用都对应真实、可检索的参考文献。",
                },
                Feature {
                    icon: "format",
                    title: "符合提交格式",
                    description: "引用格式、结构与排版一并处理。",
                },
            ],
        },
    },
    options: OptionTables {
        essay_types: [
            "论文 (Essay)", "研究论文 (Research Paper)", "案例研究 (Case Study)",
            "课程作业 (Coursework)", "学期论文 (Term Paper)", "学位论文 (Dissertation)",
            "报告 (Report)", "评论 (Review)", "演讲稿 (Speech)", "演示文稿 (Presentation)",
        ],
        academic_levels: ["高中", "本科 (1-2年级)", "本科 (学士)", "硕士", "博士"],
        word_counts: ["300 字", "500 字", "1000 字", "1600 字", "2000 字", "3000 字", "5000+ 字"],
        languages: [
            "英语 (美式)", "英语 (英式)", "西班牙语", "法语", "德语", "简体中文", "葡萄牙语",
        ],
        citation_styles: ["APA 7th", "MLA", "Chicago", "Harvard", "IEEE", "Vancouver"],
    },
    not_found: "页面不存在",
};
