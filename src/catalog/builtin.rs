//! Built-in article table compiled into the binary

/// (title, tags, description, img, href)
pub(super) const ARTICLES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Over-generalization",
        "react, typescript",
        "在追求組件通用性的過程中，容易陷入過度泛化的陷阱，導致組件變得複雜且難以維護。文章中將探討過度泛化的常見警訊與建議。",
        "/blog/techstack/react.svg",
        "/blog/react/over-generalization",
    ),
    (
        "Avoid Fetch on Render",
        "react",
        "本文解析為何應避免 Fetch on Render，並推薦 Render as You Fetch 以提升使用者體驗與渲染效能。",
        "/blog/techstack/react.svg",
        "/blog/react/avoid-fetch-on-render",
    ),
    (
        "Deep Dive into Vite",
        "infra, vite",
        "深入介紹其核心架構與效能優勢，並與傳統工具如 Webpack 做出比較，揭示其成為現代建構工具首選的關鍵與潛在挑戰。",
        "/blog/techstack/vite.svg",
        "/blog/infra/deep-dive-into-vite",
    ),
    (
        "Stop Using Enums in TS",
        "typescript",
        "避免使用 TypeScript enums！了解其型別不安全與維護困難等缺點，並用 as const 物件替代，提升靈活性與字串相容性。",
        "/blog/techstack/ts.svg",
        "/blog/typescript/stop-using-enums-in-ts",
    ),
    (
        "Native Execution of TS",
        "typescript, nodejs",
        "Node.js 近期釋出版本引入實驗性標誌，支持直接執行 TypeScript 檔案，免去手動編譯，提升開發效率。",
        "/blog/techstack/ts.svg",
        "/blog/typescript/support-native-execution",
    ),
    (
        "gRPC vs RESTful API",
        "grpc, restful",
        "gRPC 與 REST 是常見的 API 通訊架構，gRPC 採用服務導向設計與高效的 Protocol Buffers，適合高效能內部微服務。",
        "/blog/techstack/grpc.svg",
        "/blog/grpc/restful-api-vs-grpc",
    ),
];
