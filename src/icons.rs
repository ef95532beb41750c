use crossterm::style::Color;

/// One entry in the icon asset table.
///
/// Rendering dispatches through this table instead of branching on the
/// icon name, keeping the layout and motion code independent of how an
/// icon is presented.
pub struct IconAsset {
    /// Stable identifier.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Compact label for the smallest preset.
    pub code: &'static str,
    /// Brand color.
    pub color: Color,
}

impl IconAsset {
    /// Label form for an icon rendered at `icon_size` virtual pixels.
    pub fn label_for_size(&self, icon_size: f64) -> &'static str {
        if icon_size <= 40.0 {
            self.code
        } else {
            self.label
        }
    }
}

pub const ICONS: [IconAsset; 27] = [
    IconAsset { name: "reactjs", label: "React", code: "RE", color: Color::Rgb { r: 97, g: 218, b: 251 } },
    IconAsset { name: "github", label: "GitHub", code: "GH", color: Color::Rgb { r: 240, g: 246, b: 252 } },
    IconAsset { name: "vercel", label: "Vercel", code: "VC", color: Color::Rgb { r: 255, g: 255, b: 255 } },
    IconAsset { name: "python", label: "Python", code: "PY", color: Color::Rgb { r: 255, g: 212, b: 59 } },
    IconAsset { name: "nextjs2", label: "Next.js", code: "NX", color: Color::Rgb { r: 230, g: 230, b: 230 } },
    IconAsset { name: "typescript", label: "TypeScript", code: "TS", color: Color::Rgb { r: 49, g: 120, b: 198 } },
    IconAsset { name: "html5", label: "HTML5", code: "H5", color: Color::Rgb { r: 227, g: 79, b: 38 } },
    IconAsset { name: "css3", label: "CSS3", code: "C3", color: Color::Rgb { r: 21, g: 114, b: 182 } },
    IconAsset { name: "nodejs", label: "Node.js", code: "ND", color: Color::Rgb { r: 83, g: 158, b: 81 } },
    IconAsset { name: "tailwindcss", label: "Tailwind", code: "TW", color: Color::Rgb { r: 56, g: 189, b: 248 } },
    IconAsset { name: "sass", label: "Sass", code: "SA", color: Color::Rgb { r: 207, g: 100, b: 154 } },
    IconAsset { name: "nuxtjs", label: "Nuxt", code: "NU", color: Color::Rgb { r: 0, g: 220, b: 130 } },
    IconAsset { name: "astro", label: "Astro", code: "AS", color: Color::Rgb { r: 255, g: 93, b: 1 } },
    IconAsset { name: "wordpress", label: "WordPress", code: "WP", color: Color::Rgb { r: 33, g: 117, b: 155 } },
    IconAsset { name: "graphql", label: "GraphQL", code: "GQ", color: Color::Rgb { r: 225, g: 0, b: 152 } },
    IconAsset { name: "docker", label: "Docker", code: "DK", color: Color::Rgb { r: 36, g: 150, b: 237 } },
    IconAsset { name: "figma", label: "Figma", code: "FG", color: Color::Rgb { r: 242, g: 78, b: 30 } },
    IconAsset { name: "ai", label: "Illustrator", code: "AI", color: Color::Rgb { r: 255, g: 154, b: 0 } },
    IconAsset { name: "cloudflare", label: "Cloudflare", code: "CF", color: Color::Rgb { r: 243, g: 128, b: 32 } },
    IconAsset { name: "nestjs", label: "NestJS", code: "NE", color: Color::Rgb { r: 224, g: 35, b: 78 } },
    IconAsset { name: "sveltejs", label: "Svelte", code: "SV", color: Color::Rgb { r: 255, g: 62, b: 0 } },
    IconAsset { name: "aws", label: "AWS", code: "AWS", color: Color::Rgb { r: 255, g: 153, b: 0 } },
    IconAsset { name: "ec2", label: "EC2", code: "EC2", color: Color::Rgb { r: 255, g: 153, b: 0 } },
    IconAsset { name: "swift", label: "Swift", code: "SW", color: Color::Rgb { r: 240, g: 81, b: 56 } },
    IconAsset { name: "shopify", label: "Shopify", code: "SH", color: Color::Rgb { r: 149, g: 191, b: 70 } },
    IconAsset { name: "woocommerce", label: "WooCommerce", code: "WC", color: Color::Rgb { r: 150, g: 92, b: 143 } },
    IconAsset { name: "wix", label: "Wix", code: "WX", color: Color::Rgb { r: 250, g: 250, b: 250 } },
];
