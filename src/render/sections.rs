use super::{html_escape, FormView, PageRenderer};
use crate::content;
use crate::core::contact::FormStatus;
use crate::core::lightbox::Lightbox;
use crate::core::shell::NavProps;
use crate::core::telemetry::STATUS_ROWS;
use crate::domain::contact::Field;
use crate::domain::model::{Certification, ExperienceKind, GalleryImage, LightboxItem};

pub fn render_nav(r: &PageRenderer, nav: &NavProps<'_>) -> String {
    let style = r.style();
    let links: String = nav
        .items
        .iter()
        .map(|item| {
            let current = nav.active_section == Some(item.section_id);
            format!(
                r#"<li><a href="{href}" class="{class}"{aria}>{label}</a></li>"#,
                href = item.href(),
                class = if current { style.accent } else { "text-slate-400" },
                aria = if current { r#" aria-current="true""# } else { "" },
                label = html_escape(item.label),
            )
        })
        .collect();

    let mobile = if nav.menu_open {
        format!(r#"<div class="mobile-menu"><ul>{}</ul></div>"#, links)
    } else {
        String::new()
    };

    format!(
        r#"<nav class="{class}">
    <a href="{home}" class="brand">{owner}</a>
    <ul class="desktop-nav">{links}</ul>
    <a href="mailto:{email}" class="{button}">Hire Me</a>
    <button class="menu-toggle" aria-expanded="{open}">{icon}</button>
    {mobile}
</nav>"#,
        class = if nav.solid { style.nav_solid } else { style.nav },
        home = r.asset(""),
        owner = html_escape(&r.identity().owner),
        links = links,
        email = html_escape(&r.identity().email),
        button = style.button,
        open = nav.menu_open,
        icon = if nav.menu_open { "Close" } else { "Menu" },
        mobile = mobile,
    )
}

pub fn render_hero(r: &PageRenderer) -> String {
    let style = r.style();
    format!(
        r#"<section id="about" class="{section}">
    <h1 class="{heading}">{owner}</h1>
    <p class="{accent}">{tagline}</p>
    <a href="{cv}" class="{button}" download>Download CV</a>
</section>"#,
        section = style.section,
        heading = style.heading,
        owner = html_escape(&r.identity().owner),
        accent = style.accent,
        tagline = html_escape(style.hero_tagline),
        cv = r.asset(content::RESUMES[0].file),
        button = style.button,
    )
}

pub fn render_metrics(r: &PageRenderer) -> String {
    let style = r.style();
    let stats: String = content::OPERATIONAL_STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="{card}"><h3 data-count-to="{value}">{value}{suffix}</h3><span>{label}</span></div>"#,
                card = style.card,
                value = stat.value,
                suffix = html_escape(stat.suffix),
                label = stat.label,
            )
        })
        .collect();
    format!(r#"<section class="metrics {}">{}</section>"#, style.section, stats)
}

pub fn render_skills(r: &PageRenderer) -> String {
    let style = r.style();
    let tech: String = content::TECH_SKILLS
        .iter()
        .map(|skill| {
            format!(
                r#"<li><span>{name}</span><span>{level}%</span><div class="{track}"><div style="width: {level}%; background: {color}"></div></div></li>"#,
                name = html_escape(skill.name),
                level = skill.level,
                track = style.bar_track,
                color = skill.color,
            )
        })
        .collect();
    let domain: String = content::DOMAIN_SKILLS
        .iter()
        .map(|skill| {
            format!(
                r#"<li data-full-mark="{full}"><span>{subject}</span><span>{level}</span></li>"#,
                full = skill.full_mark,
                subject = html_escape(skill.subject),
                level = skill.level,
            )
        })
        .collect();

    format!(
        r#"<section id="expertise" class="{section}">
    <h2 class="{heading}">Expertise</h2>
    <ul class="tech-skills">{tech}</ul>
    <ul class="domain-skills">{domain}</ul>
</section>"#,
        section = style.section,
        heading = style.heading,
        tech = tech,
        domain = domain,
    )
}

pub fn render_marquee() -> String {
    // 內容重複一次讓跑馬燈可以無縫循環
    let items: String = content::TECH_MARQUEE
        .iter()
        .chain(content::TECH_MARQUEE.iter())
        .map(|t| format!("<span>{}</span>", html_escape(t)))
        .collect();
    format!(r#"<div class="marquee">{}</div>"#, items)
}

pub fn render_experience(r: &PageRenderer) -> String {
    let style = r.style();
    let entries: String = content::EXPERIENCES
        .iter()
        .map(|entry| {
            let achievements: String = entry
                .achievements
                .iter()
                .map(|a| format!("<li>{}</li>", html_escape(a)))
                .collect();
            let kind = match entry.kind {
                ExperienceKind::Work => "work",
                ExperienceKind::Education => "education",
            };
            format!(
                r#"<article class="{card}" data-kind="{kind}">
        <h3>{role}</h3>
        <p class="{accent}">{org}</p>
        <p>{period} · {location}</p>
        <p>{description}</p>
        <ul>{achievements}</ul>
    </article>"#,
                card = style.card,
                kind = kind,
                role = html_escape(entry.role),
                accent = style.accent,
                org = html_escape(entry.organization),
                period = html_escape(entry.period),
                location = html_escape(entry.location),
                description = html_escape(entry.description),
                achievements = achievements,
            )
        })
        .collect();

    format!(
        r#"<section id="experience" class="{section}">
    <h2 class="{heading}">Experience</h2>
    {entries}
</section>"#,
        section = style.section,
        heading = style.heading,
        entries = entries,
    )
}

pub fn render_projects(r: &PageRenderer) -> String {
    let style = r.style();
    let cards: String = content::PROJECTS
        .iter()
        .map(|project| {
            let tech: String = project
                .tech
                .iter()
                .map(|t| format!("<span>{}</span>", html_escape(t.trim())))
                .collect();
            let demo = project
                .demo_link
                .map(|link| format!(r#"<a href="{}" target="_blank" rel="noreferrer">Live Demo</a>"#, html_escape(link)))
                .unwrap_or_default();
            let stats = project
                .stats
                .as_ref()
                .map(|s| format!("<span>{}: {}</span>", html_escape(s.label), html_escape(s.value)))
                .unwrap_or_default();
            format!(
                r#"<article class="{card}" data-project="{id}" data-category="{category}">
        <h3>{title}</h3>{stats}
        <p>{description}</p>
        <div class="tech">{tech}</div>
        <a href="{link}" target="_blank" rel="noreferrer">Source</a>{demo}
    </article>"#,
                card = style.card,
                id = project.id,
                category = html_escape(project.category),
                title = html_escape(project.title),
                stats = stats,
                description = html_escape(project.description),
                tech = tech,
                link = html_escape(project.link),
                demo = demo,
            )
        })
        .collect();

    format!(
        r#"<section id="projects" class="{section}">
    <h2 class="{heading}">Projects</h2>
    {cards}
</section>"#,
        section = style.section,
        heading = style.heading,
        cards = cards,
    )
}

fn render_filters<T: LightboxItem>(lightbox: &Lightbox<T>) -> String {
    lightbox
        .categories()
        .into_iter()
        .map(|category| {
            let pressed = lightbox.filter().label() == category;
            format!(
                r#"<button class="filter" aria-pressed="{}">{}</button>"#,
                pressed,
                html_escape(category)
            )
        })
        .collect()
}

fn render_viewer(r: &PageRenderer, url: &str, title: &str, caption: &str, extra: &str) -> String {
    format!(
        r#"<div class="lightbox-backdrop" role="dialog" aria-modal="true">
    <button class="lightbox-close">Close</button>
    <button class="lightbox-prev">Previous</button>
    <figure class="lightbox-content"><img src="{src}" alt="{title}"><figcaption>{caption} · {title}</figcaption>{extra}</figure>
    <button class="lightbox-next">Next</button>
</div>"#,
        src = r.asset(url),
        title = html_escape(title),
        caption = html_escape(caption),
        extra = extra,
    )
}

pub fn render_certifications(r: &PageRenderer, lightbox: &Lightbox<Certification>) -> String {
    let style = r.style();
    let cards: String = lightbox
        .visible()
        .iter()
        .map(|cert| {
            format!(
                r#"<figure class="{card}"><img src="{src}" alt="{title}" loading="lazy"><figcaption><span>{issuer}</span> {title}</figcaption></figure>"#,
                card = style.card,
                src = r.asset(cert.url),
                title = html_escape(cert.title),
                issuer = html_escape(cert.issuer),
            )
        })
        .collect();
    let viewer = lightbox
        .selected()
        .map(|cert| {
            let verify = format!(
                r#"<a href="{}" target="_blank" rel="noreferrer">Verify Credential</a>"#,
                html_escape(cert.verify_link)
            );
            render_viewer(r, cert.url, cert.title, cert.issuer, &verify)
        })
        .unwrap_or_default();

    format!(
        r#"<section id="certifications" class="{section}">
    <h2 class="{heading}">Certifications</h2>
    <div class="filters">{filters}</div>
    <div class="grid">{cards}</div>
    {viewer}
</section>"#,
        section = style.section,
        heading = style.heading,
        filters = render_filters(lightbox),
        cards = cards,
        viewer = viewer,
    )
}

pub fn render_gallery(r: &PageRenderer, lightbox: &Lightbox<GalleryImage>) -> String {
    let style = r.style();
    let cards: String = lightbox
        .visible()
        .iter()
        .map(|image| {
            format!(
                r#"<figure class="{card}" data-category="{category}"><img src="{src}" alt="{title}" loading="lazy"><figcaption>{title}</figcaption></figure>"#,
                card = style.card,
                category = html_escape(image.category),
                src = r.asset(image.url),
                title = html_escape(image.title),
            )
        })
        .collect();
    let viewer = lightbox
        .selected()
        .map(|image| render_viewer(r, image.url, image.title, image.category, ""))
        .unwrap_or_default();

    format!(
        r#"<section id="gallery" class="{section}">
    <h2 class="{heading}">Gallery</h2>
    <div class="filters">{filters}</div>
    <div class="grid">{cards}</div>
    {viewer}
</section>"#,
        section = style.section,
        heading = style.heading,
        filters = render_filters(lightbox),
        cards = cards,
        viewer = viewer,
    )
}

pub fn render_resumes(r: &PageRenderer) -> String {
    let style = r.style();
    let cards: String = content::RESUMES
        .iter()
        .map(|resume| {
            format!(
                r#"<article class="{card}" data-resume="{id}"><h3>{title}</h3><p>{description}</p><a href="{file}" target="_blank" rel="noreferrer">View PDF</a></article>"#,
                card = style.card,
                id = resume.id,
                title = html_escape(resume.title),
                description = html_escape(resume.description),
                file = r.asset(resume.file),
            )
        })
        .collect();

    format!(
        r#"<section id="resumes" class="{section}">
    <h2 class="{heading}">Resumes</h2>
    {cards}
</section>"#,
        section = style.section,
        heading = style.heading,
        cards = cards,
    )
}

pub fn render_contact(r: &PageRenderer, form: &FormView<'_>) -> String {
    let style = r.style();
    let inputs: String = Field::ALL
        .iter()
        .map(|&field| {
            let value = html_escape(form.fields.field(field));
            let error = form
                .errors
                .get(field)
                .map(|e| format!(r#"<p class="field-error">{}</p>"#, e.message(field)))
                .unwrap_or_default();
            let control = if field == Field::Message {
                format!(r#"<textarea name="message" rows="5">{}</textarea>"#, value)
            } else {
                format!(r#"<input name="{}" value="{}">"#, field, value)
            };
            format!(r#"<div class="field">{}{}</div>"#, control, error)
        })
        .collect();

    let label = match form.status {
        FormStatus::Idle => style.submit_label,
        other => other.label(),
    };

    format!(
        r#"<section id="contact" class="{section}">
    <h2 class="{heading}">Contact</h2>
    <form class="{card}" data-status="{status:?}">
        {inputs}
        <button type="submit" class="{button}"{disabled}>{label}</button>
    </form>
</section>"#,
        section = style.section,
        heading = style.heading,
        card = style.card,
        status = form.status,
        inputs = inputs,
        button = style.button,
        disabled = if form.status == FormStatus::Sending { " disabled" } else { "" },
        label = html_escape(label),
    )
}

pub fn render_footer(r: &PageRenderer) -> String {
    let id = r.identity();
    format!(
        r#"<footer>
    <a href="mailto:{email}">{email}</a>
    <span>{phone}</span>
    <span>{location}</span>
    <p>© {year} {owner}.</p>
</footer>"#,
        email = html_escape(&id.email),
        phone = html_escape(&id.phone),
        location = html_escape(&id.location),
        year = r.year(),
        owner = html_escape(&id.owner),
    )
}

pub fn render_scroll_to_top(visible: bool) -> String {
    format!(
        r#"<button class="scroll-top {}" aria-label="Scroll to top">Top</button>"#,
        if visible { "opacity-100" } else { "opacity-0" }
    )
}

pub fn render_telemetry(uptime: &str) -> String {
    let rows: String = STATUS_ROWS
        .iter()
        .map(|(label, value)| format!("<li><span>{}</span><span>{}</span></li>", label, value))
        .collect();
    format!(
        r#"<aside class="telemetry"><span>CORE_TELEMETRY</span><ul>{}</ul><span class="uptime">{}</span></aside>"#,
        rows,
        html_escape(uptime)
    )
}
