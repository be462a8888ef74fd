mod edge_case_tests;

/// A trimmed-down bedrijfsfiche page with every section present, shaped
/// like the live site's markup
pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Bedrijfsfiche</title></head>
<body>
<h1>Acme NV</h1>
<table class="company-details">
  <tr><td>Vennootschapsnaam</td><td>Acme NV</td></tr>
  <tr><td>Vennootschapsvorm</td><td>Naamloze vennootschap</td></tr>
  <tr><td>Ondernemingsnummer</td><td>0403.200.393</td></tr>
  <tr><td>Status</td><td>Actief</td></tr>
  <tr><td>Juridische situatie</td><td>Normale toestand</td></tr>
  <tr><td>Adres</td><td>Marnixlaan 24, 1000 Brussel</td></tr>
  <tr><td>Laatste publicatie</td><td>03-07-2023</td></tr>
  <tr><td>Laatste jaarrekening</td><td>31-12-2022</td></tr>
</table>
<h2>Jaarrekeningen</h2>
<table class="financials">
  <tr><th>Jaareinde</th><th>Activa</th><th>Brutomarge</th><th>Bedrijfswinst</th><th>Belastingen</th><th>Eigen vermogen</th><th>Schulden</th></tr>
  <tr><td>31-12-2022</td><td>1.250.000</td><td>300.000</td><td>75.000</td><td>12.000</td><td>600.000</td><td>650.000</td></tr>
  <tr><td>31-12-2021</td><td>1.100.000</td><td>280.000</td><td>60.000</td><td>10.000</td><td>550.000</td><td>550.000</td></tr>
</table>
<div>
  <h2>Activiteiten</h2>
  <ul>
    <li>Groothandel in machines (4661)</li>
    <li>(toelichting bij de activiteiten)</li>
    <li>Holdingactiviteiten (64200)</li>
    <li>Adviesbureaus op het gebied van bedrijfsbeheer</li>
  </ul>
</div>
<div>
  <h2>Publicaties Belgisch Staatsblad</h2>
  <table>
    <tr><td>03-07-2023 Benoeming bestuurder</td></tr>
    <tr><td>15-05-2022 Jaarrekening neerlegging</td></tr>
    <tr><td>Toon alle publicaties</td></tr>
  </table>
</div>
<div>
  <h2>Bestuurders</h2>
  <p>Enkel toegankelijk voor geregistreerde gebruikers</p>
</div>
<p>
  <a href="/docs/jaarrekening2023.pdf">Annual report</a>
  <a href="/publicatie/akte-2023.pdf">Publicatie akte</a>
  <a href="/over-ons.html">Over ons</a>
  Volledig document: https://staatsbladmonitor.be/docs/jaarrekening2023.pdf
</p>
</body>
</html>"#;
