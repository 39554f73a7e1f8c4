//! The embedded GenAI privacy & compliance questionnaire.

use crate::model::{Catalog, Category, Priority, Question, Recommendation};

const DATA_GOVERNANCE: &str = "REC_DATA_GOVERNANCE";
const MODEL_SECURITY: &str = "REC_MODEL_SECURITY";
const COMPLIANCE_AUTOMATION: &str = "REC_COMPLIANCE_AUTOMATION";

impl Catalog {
    /// The built-in GenAI privacy & compliance catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_categories(), builtin_questions(), builtin_recommendations())
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new(
            "discovery",
            "Discovery & Inventory",
            "Understanding your GenAI landscape, data sources, and model purposes.",
            "#f7b96e",
        ),
        Category::new(
            "regulation",
            "Regulation & Classification",
            "Navigating EU AI Act applicability, risk classification, and obligations.",
            "#7192bf",
        ),
        Category::new(
            "impact",
            "Impact Assessment & Mitigation",
            "Assessing fundamental rights impact, bias, and societal effects.",
            "#2a4eb4",
        ),
        Category::new(
            "governance",
            "Governance & Operations",
            "Establishing policies, roles, QMS, and incident response for GenAI.",
            "#b07da1",
        ),
        Category::new("data", "Data", "Data governance, privacy and security", "#b07da1"),
        Category::new("security", "Security", "Cybersecurity and model robustness", "#f7b96e"),
        Category::new("ethics", "Ethics", "Ethical considerations and human oversight", "#7192bf"),
        Category::new(
            "capability",
            "Capability & Readiness",
            "Organisational readiness, skills, and technical documentation.",
            "#2a4eb4",
        ),
    ]
}

fn builtin_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            DATA_GOVERNANCE,
            "Strengthen Data Governance & Privacy Frameworks",
            "Your responses indicate potential gaps in data handling and privacy policies for AI systems. DevSecAI's Data Governance service helps establish robust frameworks, ensuring compliance with regulations like GDPR, CCPA, and managing data lifecycle for AI.",
            "https://www.devsecai.io/services/data-governance",
            Priority::High,
        )
        .with_category("discovery"),
        Recommendation::new(
            MODEL_SECURITY,
            "Enhance AI Model Security & Integrity",
            "Concerns regarding AI model security, including vulnerability to adversarial attacks or lack of integrity checks, were noted. DevSecAI offers AI Model Security assessments and hardening services to protect your valuable AI assets.",
            "https://www.devsecai.io/services/model-security",
            Priority::High,
        )
        .with_category("security"),
        Recommendation::new(
            "REC_AI_RED_TEAMING",
            "Proactive AI System Security Testing (Red Teaming)",
            "Identify and mitigate vulnerabilities in your AI systems before attackers do. DevSecAI's AI Red Teaming service simulates real-world attacks, providing actionable insights to enhance your AI defenses.",
            "https://www.devsecai.io/services/ai-red-teaming",
            Priority::High,
        )
        .with_category("security"),
        Recommendation::new(
            COMPLIANCE_AUTOMATION,
            "Automate & Streamline Compliance Monitoring",
            "Manual compliance tracking for AI can be error-prone and inefficient. DevSecAI's Compliance Automation solutions help implement continuous monitoring and reporting for your AI systems, reducing overhead and ensuring ongoing adherence.",
            "https://www.devsecai.io/services/compliance-automation",
            Priority::Medium,
        )
        .with_category("governance"),
        Recommendation::new(
            "REC_EU_AI_ACT_PREP",
            "Prepare for EU AI Act Obligations",
            "Your responses suggest a need to formalize your approach to the EU AI Act, including risk classification, conformity assessments, and technical documentation. DevSecAI provides expert guidance to navigate these complex requirements and ensure your AI systems are compliant.",
            "https://www.devsecai.io/services/eu-ai-act-readiness",
            Priority::High,
        )
        .with_category("regulation"),
        Recommendation::new(
            "REC_FRIA_IMPLEMENTATION",
            "Implement Fundamental Rights Impact Assessments (FRIA)",
            "Assessing the impact of AI systems on fundamental rights is crucial, especially under the EU AI Act. DevSecAI can help you conduct thorough FRIAs, identify potential harms, and implement mitigation strategies to ensure responsible AI deployment.",
            "https://www.devsecai.io/services/fria-assessment",
            Priority::High,
        )
        .with_category("impact"),
        Recommendation::new(
            "REC_DATA_PROTECTION_ENHANCEMENT",
            "Enhance Data Protection & Privacy Practices",
            "Ensuring robust data protection for personal data used in AI systems is critical (e.g., GDPR, HIPAA). DevSecAI helps implement data minimization, purpose limitation, and security measures for data used in AI, and establish DPAs.",
            "https://www.devsecai.io/services/data-protection",
            Priority::High,
        )
        .with_category("data"),
        Recommendation::new(
            "REC_ETHICAL_AI_FRAMEWORK",
            "Establish an Ethical AI Framework & Oversight",
            "Beyond compliance, establishing clear ethical guidelines and human oversight for AI development and deployment fosters trust and responsible innovation. DevSecAI assists in creating tailored ethical AI frameworks and governance structures.",
            "https://www.devsecai.io/services/ethical-ai-framework",
            Priority::Medium,
        )
        .with_category("ethics"),
        Recommendation::new(
            "REC_AI_READINESS_CAPABILITY",
            "Bolster AI Capability & Technical Readiness",
            "Comprehensive technical documentation and organisational readiness are key for managing AI systems effectively and meeting regulatory demands (e.g., EU AI Act). DevSecAI helps build internal capabilities and prepare necessary documentation.",
            "https://www.devsecai.io/services/ai-capability-building",
            Priority::Medium,
        )
        .with_category("capability"),
    ]
}

/// Shorthand for the common shape: id, text, category, four options, info, priority.
fn question(
    id: &str,
    text: &str,
    category_id: &str,
    options: [&str; 4],
    info: &str,
    priority: Priority,
) -> Question {
    Question::new(id, text, category_id, options)
        .with_info(info)
        .with_priority(priority)
}

fn builtin_questions() -> Vec<Question> {
    use Priority::{High, Low, Medium};

    let mut questions = Vec::with_capacity(41);

    // Discovery
    questions.extend([
        question(
            "genAiInventory",
            "Are all GenAI models and systems (in use or development) inventorised?",
            "discovery",
            ["Yes, fully", "Partially", "No, in progress", "No, not started"],
            "A full inventory is key to understanding scope and potential risks.",
            High,
        )
        .with_trigger(DATA_GOVERNANCE, ["Partially", "No, in progress", "No, not started"]),
        question(
            "dataSourcesGenAi",
            "Are data sources (training, fine-tuning, RAG) for GenAI models documented and assessed for bias or quality?",
            "discovery",
            [
                "Yes, fully documented & assessed",
                "Partially documented/assessed",
                "Documented, not assessed",
                "No",
            ],
            "Data lineage and quality understanding is key under the EU AI Act.",
            High,
        )
        .with_trigger(
            DATA_GOVERNANCE,
            ["Partially documented/assessed", "Documented, not assessed", "No"],
        ),
        question(
            "modelPurposeGenAi",
            "Is each GenAI system's purpose and operational context clearly defined and documented?",
            "discovery",
            ["Yes, for all systems", "For most systems", "For some systems", "No"],
            "Defining the purpose helps in risk classification and conformity assessment.",
            Medium,
        )
        .with_trigger(DATA_GOVERNANCE, ["For some systems", "No"]),
        question(
            "thirdPartyGenAi",
            "If using third-party GenAI models/APIs (e.g., LLMs), are their compliance and risk profiles understood?",
            "discovery",
            [
                "Yes, fully understood",
                "Yes, partially understood",
                "Yes, but not understood",
                "No third-party models used",
            ],
            "Third-party component responsibilities must be clear.",
            High,
        )
        .with_trigger(
            MODEL_SECURITY,
            ["Yes, partially understood", "Yes, but not understood"],
        ),
        question(
            "systemBoundariesGenAi",
            "Are system boundaries and integration points for GenAI applications with other enterprise systems defined?",
            "discovery",
            ["Yes, clearly defined", "Partially defined", "In progress", "No"],
            "Clear boundaries are vital for security and impact assessment.",
            Medium,
        ),
    ]);

    // Regulation
    questions.extend([
        question(
            "euAiActApplicability",
            "Do your GenAI systems fall under the EU AI Act's scope?",
            "regulation",
            [
                "Yes, determined",
                "No, assessment pending",
                "Unsure",
                "Not applicable (outside EU market/impact)",
            ],
            "The EU AI Act applies to providers, deployers, importers, and distributors of AI systems in the EU.",
            High,
        )
        .with_regions(["EU"])
        .with_trigger(COMPLIANCE_AUTOMATION, ["No, assessment pending", "Unsure"]),
        question(
            "riskClassificationEuAIA",
            "Are your GenAI systems classified by EU AI Act risk categories (unacceptable, high, limited, minimal)?",
            "regulation",
            ["Yes, all classified", "Partially classified", "Classification in progress", "No"],
            "Risk classification dictates obligation levels.",
            High,
        ),
        question(
            "highRiskObligationsGenAi",
            "If GenAI systems are high-risk, are you prepared for EU AI Act obligations (e.g., QMS, technical documentation, conformity assessment)?",
            "regulation",
            [
                "Yes, fully prepared",
                "Partially prepared",
                "Aware, not yet prepared",
                "Not applicable / No high-risk systems",
            ],
            "High-risk AI systems face stringent requirements.",
            High,
        ),
        question(
            "gpAiModelObligations",
            "If developing/using GPAI models, are you aware of specific EU AI Act obligations (e.g., transparency, technical documentation)?",
            "regulation",
            [
                "Yes, fully aware and prepared",
                "Aware, partially prepared",
                "Unaware of specific obligations",
                "Not applicable",
            ],
            "GPAI models, particularly systemic ones, have dedicated rules.",
            High,
        ),
        question(
            "conformityAssessmentEuAIA",
            "For high-risk GenAI systems, is there a plan for conformity assessment before market placement or use?",
            "regulation",
            ["Yes, plan in place", "Planning in progress", "No plan yet", "Not applicable"],
            "Conformity assessment shows EU AI Act compliance.",
            Medium,
        ),
    ]);

    // Impact
    questions.extend([
        question(
            "fundamentalRightsImpactGenAi",
            "Has a Fundamental Rights Impact Assessment (FRIA) been conducted for GenAI systems, particularly if high-risk?",
            "impact",
            ["Yes, FRIA conducted", "FRIA in progress", "Planned, not started", "No / Not applicable"],
            "The EU AI Act emphasises fundamental rights protection.",
            High,
        ),
        question(
            "biasDetectionMitigationGenAi",
            "Are processes in place to detect, document, and mitigate biases in GenAI models and their outputs?",
            "impact",
            ["Yes, robust processes", "Processes in development", "Aware, no formal process", "No"],
            "Addressing bias is vital for fairness and non-discrimination.",
            High,
        ),
        question(
            "societalImpactGenAi",
            "Have potential societal impacts (e.g., employment, public discourse, environment) of GenAI systems been assessed?",
            "impact",
            [
                "Yes, comprehensive assessment",
                "Partial assessment",
                "Aware, not formally assessed",
                "No",
            ],
            "Consider broader societal impacts beyond direct user harm.",
            Medium,
        ),
        question(
            "misusePotentialGenAi",
            "Has the potential for misuse or malicious use of GenAI systems (e.g., deepfakes, disinformation) been assessed and documented?",
            "impact",
            [
                "Yes, assessed & documented",
                "Assessed, not documented",
                "Partially assessed",
                "No",
            ],
            "Understanding misuse potential is key for risk management.",
            High,
        ),
        question(
            "environmentalImpactGenAi",
            "Has the environmental impact (e.g., energy use for training/inference) of GenAI models been considered or assessed?",
            "impact",
            [
                "Yes, assessed & documented",
                "Considered, not formally assessed",
                "Aware, no action taken",
                "No",
            ],
            "Sustainability is an increasing concern for large AI models.",
            Low,
        ),
    ]);

    // Governance & operations
    questions.extend([
        question(
            "genAiPolicyFramework",
            "Has your organization established a formal, documented policy framework specifically addressing the governance of GenAI development, deployment, and use, including acceptable use, data handling, and ethical considerations?",
            "governance",
            [
                "Yes, comprehensive & documented",
                "Policy in development",
                "Informal guidelines exist",
                "No specific GenAI policy",
            ],
            "A clear GenAI policy framework is crucial for consistent, responsible, and compliant use across the organization.",
            High,
        ),
        question(
            "genAiRolesAccountability",
            "Are there clearly defined roles, responsibilities, and accountability structures for the oversight and governance of GenAI systems, including a designated individual or body responsible for GenAI compliance?",
            "governance",
            [
                "Yes, clearly defined & assigned",
                "Partially defined or assigned",
                "Responsibilities being defined",
                "No defined roles/accountability",
            ],
            "Clear accountability ensures that GenAI governance is effectively managed and enforced.",
            High,
        ),
        question(
            "genAiLegalReviewProcess",
            "Is there a formal process to regularly review and ensure that GenAI systems and their use comply with applicable local laws, regulations (e.g., data privacy, IP, consumer protection), and contractual obligations?",
            "governance",
            [
                "Yes, formal & regular review process",
                "Ad-hoc review process",
                "Process being developed",
                "No formal review process",
            ],
            "Ongoing legal and regulatory review is essential to maintain compliance in the evolving GenAI landscape.",
            High,
        ),
        question(
            "genAiIncidentResponsePlan",
            "Does your organization have an incident response plan specifically addressing potential breaches, misuse, or failures related to GenAI systems, including notification procedures and mitigation strategies?",
            "governance",
            [
                "Yes, specific GenAI plan in place",
                "General IT incident plan adapted for AI",
                "Plan in development",
                "No specific AI incident plan",
            ],
            "GenAI incidents (e.g., data leakage via LLM, generation of harmful content) may require specialized response procedures beyond standard IT incidents.",
            Medium,
        ),
        question(
            "genAiQMS",
            "Has a Quality Management System (QMS) or equivalent set of processes been established or adapted to oversee the lifecycle of GenAI models, including development, testing, validation, and monitoring for performance and compliance?",
            "governance",
            [
                "Yes, comprehensive QMS for GenAI",
                "QMS partially adapted/implemented",
                "QMS principles being considered",
                "No specific QMS for GenAI",
            ],
            "A QMS helps ensure GenAI systems are developed and operate reliably, ethically, and in compliance with standards.",
            Medium,
        ),
        question(
            "genAiEmployeeTrainingGovernance",
            "Are employees who develop, deploy, or use GenAI systems provided with regular training on relevant policies, ethical guidelines, legal obligations, and potential risks associated with GenAI?",
            "governance",
            [
                "Yes, regular & comprehensive training",
                "Ad-hoc or initial training only",
                "Training program in development",
                "No formal training provided",
            ],
            "Educated employees are key to mitigating risks and ensuring responsible GenAI adoption.",
            Medium,
        ),
    ]);

    // Data
    questions.extend([
        question(
            "gdprComplianceGenAi",
            "Do GenAI systems processing personal data comply with GDPR principles (e.g., lawfulness, fairness, transparency, data minimisation)?",
            "data",
            [
                "Yes, fully compliant",
                "Partially compliant",
                "Compliance efforts ongoing",
                "Not applicable / No personal data",
            ],
            "GDPR applies to AI systems processing EU residents' personal data.",
            High,
        )
        .with_regions(["EU", "UK"]),
        question(
            "dataProcessingAgreementsGenAi",
            "Are Data Processing Agreements (DPAs) in place with third-party GenAI providers/users involving personal data?",
            "data",
            ["Yes, for all relevant parties", "For some parties", "No DPAs in place", "Not applicable"],
            "DPAs are mandatory under GDPR for controller-processor relations.",
            High,
        ),
        question(
            "hipaaComplianceGenAi",
            "For GenAI in healthcare, are they HIPAA compliant regarding Protected Health Information (PHI)?",
            "data",
            [
                "Yes, fully compliant",
                "Partially compliant",
                "Compliance efforts ongoing",
                "Not applicable",
            ],
            "HIPAA sets standards for protecting sensitive patient health information.",
            High,
        )
        .with_regions(["USA"]),
        question(
            "syntheticDataGenAi",
            "If using synthetic data for GenAI, has its quality, representativeness, and re-identification risks been assessed?",
            "data",
            [
                "Yes, thoroughly assessed",
                "Partially assessed",
                "Aware of risks, not assessed",
                "Not using synthetic data",
            ],
            "Synthetic data has its own privacy and quality challenges.",
            Medium,
        ),
        question(
            "dataSubjectRightsGenAi",
            "Are mechanisms in place for data subject rights (e.g., access, rectification, erasure) for personal data used/generated by GenAI systems?",
            "data",
            [
                "Yes, robust mechanisms",
                "Mechanisms in development",
                "Limited/manual mechanisms",
                "No / Not applicable",
            ],
            "GenAI systems must respect GDPR data subject rights.",
            High,
        ),
    ]);

    // Security
    questions.extend([
        question(
            "adversarialAttackDefenseGenAi",
            "Are defences implemented against common adversarial attacks on GenAI models (e.g., data poisoning, model evasion, prompt injection)?",
            "security",
            [
                "Yes, comprehensive defences",
                "Some defences implemented",
                "Aware, planning defences",
                "No specific defences",
            ],
            "GenAI models are vulnerable to unique security threats.",
            High,
        ),
        question(
            "dataSecurityTrainingGenAi",
            "Is data for training, fine-tuning, and inference of GenAI models secured against unauthorised access, leakage, or corruption?",
            "security",
            ["Yes, strong security", "Moderate security", "Basic security", "Security unclear/lacking"],
            "Protecting data throughout the AI lifecycle is critical.",
            High,
        ),
        question(
            "modelSecurityGenAi",
            "Are your GenAI models (weights, architecture) protected against theft or unauthorised modification?",
            "security",
            [
                "Yes, strong protection",
                "Moderate protection",
                "Basic protection",
                "Protection unclear/lacking",
            ],
            "AI models are valuable IP and security assets.",
            Medium,
        ),
        question(
            "accessControlsGenAi",
            "Are robust access controls and authentication for users and systems interacting with GenAI applications in place?",
            "security",
            [
                "Yes, robust controls",
                "Standard controls",
                "Limited controls",
                "No specific access controls",
            ],
            "Ensuring only authorised access to GenAI capabilities.",
            High,
        ),
        question(
            "incidentResponseGenAi",
            "Is there an incident response plan specifically addressing security breaches or failures related to GenAI systems?",
            "security",
            [
                "Yes, specific plan",
                "General IT incident plan covers AI",
                "No specific AI incident plan",
                "No incident plan",
            ],
            "GenAI incidents may require specialised response procedures.",
            Medium,
        ),
    ]);

    // Ethics
    questions.extend([
        question(
            "ethicalGuidelinesGenAi",
            "Have ethical guidelines for GenAI development and deployment been established or adopted?",
            "ethics",
            [
                "Yes, comprehensive guidelines",
                "Guidelines in development",
                "Considering guidelines",
                "No formal guidelines",
            ],
            "Ethical principles guide responsible AI beyond legal compliance.",
            High,
        ),
        question(
            "fairnessMetricsGenAi",
            "Are GenAI systems monitored for fairness using defined metrics, with identified disparities addressed?",
            "ethics",
            [
                "Yes, continuous monitoring & mitigation",
                "Periodic monitoring",
                "Aware, no active monitoring",
                "No",
            ],
            "Fairness requires ongoing effort and measurement.",
            High,
        ),
        question(
            "humanOversightEthicsGenAi",
            "Is there a clear process for human oversight and intervention in GenAI decisions/content, especially in sensitive contexts?",
            "ethics",
            [
                "Yes, well-defined process",
                "Process exists, ad-hoc",
                "Limited human oversight",
                "No structured human oversight",
            ],
            "EU AI Act mandates human oversight for high-risk systems.",
            High,
        ),
        question(
            "stakeholderEngagementEthicsGenAi",
            "Do you engage diverse stakeholders (including affected communities) on ethical implications of GenAI systems?",
            "ethics",
            [
                "Yes, regular engagement",
                "Occasional engagement",
                "Limited/no engagement",
                "Not applicable",
            ],
            "Involving stakeholders can uncover unforeseen ethical issues.",
            Medium,
        ),
        question(
            "accountabilityMechanismsEthicsGenAi",
            "Are clear accountability mechanisms in place for outcomes and decisions by or assisted by GenAI systems?",
            "ethics",
            ["Yes, clear mechanisms", "Mechanisms developing", "Limited accountability", "No"],
            "Knowing who is responsible when AI systems err is vital.",
            High,
        ),
    ]);

    // Capability & readiness
    questions.extend([
        question(
            "transparencyGenAiOutput",
            "Is it clearly disclosed to users when they interact with GenAI systems or consume AI-generated content (e.g., deepfakes, text)?",
            "capability",
            [
                "Yes, always disclosed",
                "Disclosed most cases",
                "Partially/inconsistently disclosed",
                "No disclosure",
            ],
            "Transparency is a key EU AI Act requirement for certain AI systems.",
            High,
        ),
        question(
            "explainabilityGenAi",
            "Can GenAI systems provide context-appropriate explanations or justifications for their outputs/decisions?",
            "capability",
            [
                "Yes, satisfactory degree",
                "Limited explainability",
                "Explainability research goal",
                "No explainability features",
            ],
            "Though challenging for GenAI, some explainability is often desired/required.",
            Medium,
        ),
        question(
            "userControlGenAi",
            "Do users have appropriate control over GenAI system operation and outputs (e.g., stop, correct, override)?",
            "capability",
            ["Yes, sufficient control", "Some control", "Limited control", "No direct control"],
            "Empowering users with control enhances trust and safety.",
            Medium,
        ),
        question(
            "robustnessReliabilityGenAi",
            "Are GenAI systems tested for robustness and reliability under various conditions (including edge cases, unexpected inputs)?",
            "capability",
            [
                "Yes, extensively tested",
                "Moderately tested",
                "Basic testing",
                "Limited/no specific testing",
            ],
            "High-risk AI systems must be robust and reliable.",
            High,
        ),
        question(
            "technicalDocumentationGenAi",
            "Is comprehensive technical documentation maintained for your GenAI systems, as required by the EU AI Act for high-risk systems?",
            "capability",
            [
                "Yes, up-to-date and comprehensive",
                "Documentation in progress",
                "Basic documentation exists",
                "No formal technical documentation",
            ],
            "Technical documentation is essential for conformity assessment and transparency.",
            High,
        ),
    ]);

    questions
}
